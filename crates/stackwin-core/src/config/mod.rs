mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

pub use crate::log::LogConfig;
pub use loader::{config_dir, config_path, load, try_load};

use crate::TerminalPosition;

/// Top-level configuration for stackwin.
///
/// Loaded from `~/.config/stackwin/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where cascaded windows start and how far each one is shifted.
    pub cascade: CascadeConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Cascade placement settings.
///
/// The first cascaded window opens at the origin; every following one is
/// shifted right and down by the configured amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Column of the first cascaded window.
    pub origin_column: i32,
    /// Row of the first cascaded window.
    pub origin_row: i32,
    /// Columns to shift right per cascaded window.
    pub shift_right: i32,
    /// Rows to shift down per cascaded window.
    pub shift_down: i32,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            origin_column: 2,
            origin_row: 1,
            shift_right: 2,
            shift_down: 1,
        }
    }
}

impl CascadeConfig {
    /// Position of the first cascaded window.
    pub fn origin(&self) -> TerminalPosition {
        TerminalPosition::new(self.origin_column, self.origin_row)
    }
}

impl Config {
    /// Clamps cascade and logging values to safe ranges.
    ///
    /// Prevents negative origins and shifts that would push cascaded
    /// windows off-screen after a handful of windows.
    pub fn validate(&mut self) {
        self.cascade.origin_column = self.cascade.origin_column.clamp(0, 1000);
        self.cascade.origin_row = self.cascade.origin_row.clamp(0, 1000);
        self.cascade.shift_right = self.cascade.shift_right.clamp(0, 100);
        self.cascade.shift_down = self.cascade.shift_down.clamp(0, 100);
        self.logging.max_file_mb = self.logging.max_file_mb.min(1024);
    }
}
