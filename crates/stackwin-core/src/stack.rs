use crate::{TerminalPosition, WindowRef};

/// Bookkeeping the manager keeps for each window it manages.
///
/// Fields are fixed when the window is added and never change.
pub(crate) struct ManagedWindow {
    pub window: WindowRef,
    /// Cascade position, or `None` to center the window on every query.
    pub top_left: Option<TerminalPosition>,
    pub allow_larger_than_screen: bool,
    pub ordinal: u64,
}

/// Placement data of a managed window, copied out of the stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    pub top_left: Option<TerminalPosition>,
    pub allow_larger_than_screen: bool,
}

impl ManagedWindow {
    pub fn placement(&self) -> Placement {
        Placement {
            top_left: self.top_left,
            allow_larger_than_screen: self.allow_larger_than_screen,
        }
    }
}

/// Windows in z-order, bottom first.
///
/// Ordinals come from a counter that only moves forward, so appending
/// keeps the list sorted and removals leave gaps instead of renumbering.
pub(crate) struct WindowStack {
    entries: Vec<ManagedWindow>,
    next_ordinal: u64,
}

impl WindowStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_ordinal: 0,
        }
    }

    /// Puts a window on top of the stack and returns its ordinal.
    pub fn push(
        &mut self,
        window: WindowRef,
        top_left: Option<TerminalPosition>,
        allow_larger_than_screen: bool,
    ) -> u64 {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        self.entries.push(ManagedWindow {
            window,
            top_left,
            allow_larger_than_screen,
            ordinal,
        });
        ordinal
    }

    /// Removes the lowest record for the given window.
    ///
    /// Returns the removed record, or `None` if the window isn't managed.
    pub fn remove(&mut self, window: &WindowRef) -> Option<ManagedWindow> {
        let pos = self.index_of(window)?;
        Some(self.entries.remove(pos))
    }

    /// Looks up the record for the given window by identity.
    pub fn get(&self, window: &WindowRef) -> Option<&ManagedWindow> {
        self.iter().find(|m| m.window == *window)
    }

    /// Returns the topmost record.
    pub fn last(&self) -> Option<&ManagedWindow> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManagedWindow> {
        self.entries.iter()
    }

    /// Returns the managed windows, bottom to top.
    pub fn windows(&self) -> Vec<WindowRef> {
        self.iter().map(|m| m.window.clone()).collect()
    }

    fn index_of(&self, window: &WindowRef) -> Option<usize> {
        self.entries.iter().position(|m| m.window == *window)
    }
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new()
    }
}
