//! The stacked window manager.
//!
//! Windows are kept in a single stack ordered by when they were added.
//! The topmost window is the active one and receives all keyboard input.
//! New windows are either cascaded from the top-left corner or centered
//! on the screen, and are shrunk to fit the screen unless they opt out.

use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{ReentrantMutex, RwLock};
use tracing::{debug, trace};

use crate::config::{CascadeConfig, Config};
use crate::decoration::{DefaultWindowDecorationRenderer, WindowDecorationRenderer};
use crate::stack::{Placement, WindowStack};
use crate::{Error, Hint, KeyStroke, Result, TerminalPosition, TerminalSize, WindowRef};

/// The contract between a window manager and the host's event/render loop.
///
/// The input thread calls [`handle_input`](Self::handle_input) while the
/// render thread polls [`is_invalid`](Self::is_invalid) and asks for each
/// window's position and size, so implementations must be thread-safe.
pub trait WindowManager: Send + Sync {
    /// Starts managing a window and puts it on top of the stack.
    fn add_window(&self, window: &WindowRef);

    /// Stops managing a window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the window isn't managed.
    fn remove_window(&self, window: &WindowRef) -> Result<()>;

    /// Returns the managed windows, bottom to top.
    fn windows(&self) -> Vec<WindowRef>;

    /// Returns the window that receives input, if any.
    fn active_window(&self) -> Option<WindowRef>;

    /// Passes a key stroke to the active window. Returns whether it was
    /// consumed.
    fn handle_input(&self, key: &KeyStroke) -> bool;

    /// Returns whether any managed window needs redrawing.
    fn is_invalid(&self) -> bool;

    /// Returns the renderer that decorates the given window.
    fn window_decoration_renderer(&self, window: &WindowRef) -> Arc<dyn WindowDecorationRenderer>;

    /// Returns where the window's decorated top-left corner goes on a
    /// screen of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the window isn't managed.
    fn top_left_position(
        &self,
        window: &WindowRef,
        screen: TerminalSize,
    ) -> Result<TerminalPosition>;

    /// Returns the decorated size of the window when placed at `top_left`
    /// (or anywhere, if `None`) on a screen of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the window isn't managed.
    fn size(
        &self,
        window: &WindowRef,
        top_left: Option<TerminalPosition>,
        screen: TerminalSize,
    ) -> Result<TerminalSize>;
}

struct State {
    stack: WindowStack,
    next_top_left: TerminalPosition,
}

/// A window manager that stacks windows in the order they were added.
///
/// Windows declaring [`Hint::LocationCascade`], or no hints at all, get a
/// fixed position from the cascade cursor. All other windows are centered
/// on each query. Unless a window declares [`Hint::DontResizeToFitScreen`],
/// its size is clamped so it doesn't extend past the screen.
///
/// Every stack operation runs under one reentrant lock, so a window may
/// call back into the manager from its input handler (for example to
/// remove itself) on the same thread.
pub struct StackedWindowManager {
    me: Weak<StackedWindowManager>,
    state: ReentrantMutex<RefCell<State>>,
    /// Copy of the window list for [`is_invalid`](WindowManager::is_invalid),
    /// republished on every add and remove.
    snapshot: RwLock<Arc<[WindowRef]>>,
    renderer: Arc<dyn WindowDecorationRenderer>,
    shift_right: i32,
    shift_down: i32,
}

impl StackedWindowManager {
    /// Creates a manager with the default cascade and decorations.
    pub fn new() -> Arc<Self> {
        Self::with_settings(
            &CascadeConfig::default(),
            Arc::new(DefaultWindowDecorationRenderer),
        )
    }

    /// Creates a manager from a loaded configuration.
    pub fn from_config(config: &Config) -> Arc<Self> {
        Self::with_settings(&config.cascade, Arc::new(DefaultWindowDecorationRenderer))
    }

    /// Creates a manager with explicit cascade settings and renderer.
    pub fn with_settings(
        cascade: &CascadeConfig,
        renderer: Arc<dyn WindowDecorationRenderer>,
    ) -> Arc<Self> {
        let state = State {
            stack: WindowStack::new(),
            next_top_left: cascade.origin(),
        };
        Arc::new_cyclic(|me| Self {
            me: me.clone(),
            state: ReentrantMutex::new(RefCell::new(state)),
            snapshot: RwLock::new(Arc::from(Vec::new())),
            renderer,
            shift_right: cascade.shift_right,
            shift_down: cascade.shift_down,
        })
    }

    fn publish(&self, stack: &WindowStack) {
        *self.snapshot.write() = Arc::from(stack.windows());
    }

    /// Copies the placement of a managed window out of the stack.
    fn placement(&self, window: &WindowRef, operation: &'static str) -> Result<Placement> {
        let guard = self.state.lock();
        let state = guard.borrow();
        state
            .stack
            .get(window)
            .map(|m| m.placement())
            .ok_or(Error::InvalidArgument {
                operation,
                window: window.id(),
            })
    }

    /// Content size of the window, clamped to the screen unless the window
    /// opted out.
    fn undecorated_size(
        &self,
        window: &WindowRef,
        top_left: Option<TerminalPosition>,
        screen: TerminalSize,
        operation: &'static str,
    ) -> Result<TerminalSize> {
        let placement = self.placement(window, operation)?;
        let preferred = window.preferred_size();
        if placement.allow_larger_than_screen {
            return Ok(preferred);
        }
        Ok(match top_left {
            // Not positioned yet, so the whole screen is available.
            None => preferred.min(&screen),
            Some(top_left) => preferred.min(&screen.remaining_from(&top_left)),
        })
    }
}

impl WindowManager for StackedWindowManager {
    fn add_window(&self, window: &WindowRef) {
        let guard = self.state.lock();
        let cascaded = window.has_hint(Hint::LocationCascade) || window.hints().is_empty();
        let allow_larger_than_screen = window.has_hint(Hint::DontResizeToFitScreen);
        let (ordinal, top_left, depth) = {
            let mut state = guard.borrow_mut();
            let top_left = if cascaded {
                let position = state.next_top_left;
                state.next_top_left = position.with_relative(self.shift_right, self.shift_down);
                Some(position)
            } else {
                None
            };
            let ordinal = state
                .stack
                .push(window.clone(), top_left, allow_larger_than_screen);
            self.publish(&state.stack);
            (ordinal, top_left, state.stack.len())
        };
        debug!(
            %window,
            ordinal,
            ?top_left,
            allow_larger_than_screen,
            depth,
            "window added"
        );
        if let Some(aware) = window.as_manager_aware() {
            let me: Weak<dyn WindowManager> = self.me.clone();
            aware.attach_manager(me);
        }
    }

    fn remove_window(&self, window: &WindowRef) -> Result<()> {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        let removed = state.stack.remove(window).ok_or(Error::InvalidArgument {
            operation: "remove_window",
            window: window.id(),
        })?;
        self.publish(&state.stack);
        let depth = state.stack.len();
        drop(state);
        debug!(%window, ordinal = removed.ordinal, depth, "window removed");
        // The record may hold the last handle to the window, so it is
        // released only after the stack borrow ends.
        drop(removed);
        Ok(())
    }

    fn windows(&self) -> Vec<WindowRef> {
        let guard = self.state.lock();
        let state = guard.borrow();
        state.stack.windows()
    }

    fn active_window(&self) -> Option<WindowRef> {
        let guard = self.state.lock();
        let state = guard.borrow();
        state.stack.last().map(|m| m.window.clone())
    }

    fn handle_input(&self, key: &KeyStroke) -> bool {
        let guard = self.state.lock();
        let active = guard.borrow().stack.last().map(|m| m.window.clone());
        let Some(active) = active else {
            trace!(?key, "no window to receive input");
            return false;
        };
        // The lock stays held, the borrow does not: the handler may call
        // back into the manager.
        let handled = active.handle_input(key);
        drop(guard);
        handled
    }

    fn is_invalid(&self) -> bool {
        let windows = Arc::clone(&self.snapshot.read());
        windows.iter().any(|w| w.is_enabled())
    }

    fn window_decoration_renderer(&self, _window: &WindowRef) -> Arc<dyn WindowDecorationRenderer> {
        Arc::clone(&self.renderer)
    }

    fn top_left_position(
        &self,
        window: &WindowRef,
        screen: TerminalSize,
    ) -> Result<TerminalPosition> {
        let _guard = self.state.lock();
        let placement = self.placement(window, "top_left_position")?;
        if let Some(top_left) = placement.top_left {
            return Ok(top_left);
        }
        let size = self.size(window, None, screen)?;
        Ok(screen.centered(&size))
    }

    fn size(
        &self,
        window: &WindowRef,
        top_left: Option<TerminalPosition>,
        screen: TerminalSize,
    ) -> Result<TerminalSize> {
        let _guard = self.state.lock();
        let undecorated = self.undecorated_size(window, top_left, screen, "size")?;
        Ok(self
            .window_decoration_renderer(window)
            .decorated_size(window, undecorated))
    }
}

impl fmt::Debug for StackedWindowManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.state.lock();
        let (windows, next_top_left) = {
            let state = guard.borrow();
            (state.stack.windows(), state.next_top_left)
        };
        f.debug_struct("StackedWindowManager")
            .field("windows", &windows)
            .field("next_top_left", &next_top_left)
            .finish_non_exhaustive()
    }
}
