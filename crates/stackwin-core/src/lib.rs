//! Stacked window manager for terminal user interfaces.
//!
//! A [`StackedWindowManager`] owns the z-ordered list of top-level windows
//! of a text UI. It decides where each window goes and how big it may be,
//! routes key strokes to the topmost window and tells the render loop when
//! something needs redrawing. Windows, key decoding and drawing are
//! supplied by the host through the [`Window`] and
//! [`WindowDecorationRenderer`] traits.

pub mod config;
pub mod decoration;
pub mod error;
pub mod geometry;
pub mod hint;
pub mod input;
pub mod log;
pub mod manager;
mod stack;
pub mod window;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use decoration::{DefaultWindowDecorationRenderer, WindowDecorationRenderer};
pub use error::{ConfigError, Error, Result};
pub use geometry::{TerminalPosition, TerminalSize};
pub use hint::Hint;
pub use input::{Key, KeyStroke};
pub use manager::{StackedWindowManager, WindowManager};
pub use window::{ManagerAware, Window, WindowId, WindowRef};
