use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, Weak};

use crate::manager::WindowManager;
use crate::{Hint, KeyStroke, TerminalSize};

/// Identity of a window while it is alive.
///
/// Derived from the window's allocation address, the same way a native
/// window handle identifies an OS window.
pub type WindowId = usize;

/// A top-level window as seen by the window manager.
///
/// The window owns its content and widgets; the manager only asks it for
/// its preferred size and hints, forwards key strokes to it and polls
/// whether it needs redrawing. Implementations use interior mutability
/// because the manager is shared between the input and render threads.
pub trait Window: Send + Sync {
    /// Returns the window title. Defaults to an empty title.
    fn title(&self) -> String {
        String::new()
    }

    /// Returns the size the window's content would like to occupy.
    fn preferred_size(&self) -> TerminalSize;

    /// Returns the placement hints chosen when the window was created.
    fn hints(&self) -> &[Hint];

    /// Handles a key stroke. Returns whether the window consumed it.
    fn handle_input(&self, key: &KeyStroke) -> bool;

    /// Returns whether the window is still being updated and needs redrawing.
    fn is_enabled(&self) -> bool;

    /// Returns the manager back-reference capability, if the window has one.
    fn as_manager_aware(&self) -> Option<&dyn ManagerAware> {
        None
    }
}

/// Optional capability for windows that want to know their manager.
///
/// The manager calls [`attach_manager`](Self::attach_manager) when the
/// window is added. The reference is weak: the window must not keep the
/// manager alive, and the manager never relies on the link itself.
pub trait ManagerAware {
    fn attach_manager(&self, manager: Weak<dyn WindowManager>);
}

/// A shared handle to a window, compared by identity.
///
/// Two handles are equal only if they point at the same window, never
/// because two windows happen to look alike.
#[derive(Clone)]
pub struct WindowRef(Arc<dyn Window>);

impl WindowRef {
    /// Wraps a window in a new shared handle.
    pub fn new(window: impl Window + 'static) -> Self {
        Self(Arc::new(window))
    }

    /// Wraps an already shared window.
    pub fn from_arc(window: Arc<dyn Window>) -> Self {
        Self(window)
    }

    /// Returns the identity of the window behind this handle.
    pub fn id(&self) -> WindowId {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }

    /// Returns whether the window declares the given hint.
    pub fn has_hint(&self, hint: Hint) -> bool {
        self.0.hints().contains(&hint)
    }

    /// Returns the underlying shared window.
    pub fn as_arc(&self) -> &Arc<dyn Window> {
        &self.0
    }
}

impl Deref for WindowRef {
    type Target = dyn Window;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl From<Arc<dyn Window>> for WindowRef {
    fn from(window: Arc<dyn Window>) -> Self {
        Self(window)
    }
}

impl PartialEq for WindowRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for WindowRef {}

impl Hash for WindowRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for WindowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowRef")
            .field("id", &format_args!("0x{:X}", self.id()))
            .field("title", &self.0.title())
            .finish()
    }
}

impl fmt::Display for WindowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.0.title();
        if title.is_empty() {
            write!(f, "window 0x{:X}", self.id())
        } else {
            write!(f, "window 0x{:X} \"{title}\"", self.id())
        }
    }
}
