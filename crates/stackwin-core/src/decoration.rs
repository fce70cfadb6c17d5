use crate::{Hint, TerminalSize, WindowRef};

/// Computes the footprint of a window's border and title.
///
/// Drawing is done elsewhere; the window manager only needs to know how
/// much screen space the decorations add around the content.
pub trait WindowDecorationRenderer: Send + Sync {
    /// Returns the size of `window` including decorations, given the size
    /// of its content area.
    fn decorated_size(&self, window: &WindowRef, undecorated: TerminalSize) -> TerminalSize;
}

/// Single-line border around the content with the title in the top edge.
///
/// Windows declaring [`Hint::NoWindowDecorations`] are left undecorated.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWindowDecorationRenderer;

/// Columns taken by the border corners and the padding around the title.
const TITLE_CHROME: i32 = 4;

impl WindowDecorationRenderer for DefaultWindowDecorationRenderer {
    fn decorated_size(&self, window: &WindowRef, undecorated: TerminalSize) -> TerminalSize {
        if window.has_hint(Hint::NoWindowDecorations) {
            return undecorated;
        }
        let title_columns = i32::try_from(window.title().chars().count()).unwrap_or(i32::MAX);
        undecorated
            .with_relative(2, 2)
            .max(&TerminalSize::new(title_columns.saturating_add(TITLE_CHROME), 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestWindow;

    #[test]
    fn border_adds_one_cell_per_side() {
        // Arrange
        let window = WindowRef::new(TestWindow::new(10, 5));

        // Act
        let size = DefaultWindowDecorationRenderer.decorated_size(&window, TerminalSize::new(10, 5));

        // Assert
        assert_eq!(size, TerminalSize::new(12, 7));
    }

    #[test]
    fn long_title_widens_the_frame() {
        // Arrange
        let window = WindowRef::new(TestWindow::new(4, 1).with_title("Preferences"));

        // Act
        let size = DefaultWindowDecorationRenderer.decorated_size(&window, TerminalSize::new(4, 1));

        // Assert — 11 title chars + 4
        assert_eq!(size, TerminalSize::new(15, 3));
    }

    #[test]
    fn no_decorations_hint_keeps_content_size() {
        // Arrange
        let window =
            WindowRef::new(TestWindow::new(10, 5).with_hints(&[Hint::NoWindowDecorations]));

        // Act
        let size = DefaultWindowDecorationRenderer.decorated_size(&window, TerminalSize::new(10, 5));

        // Assert
        assert_eq!(size, TerminalSize::new(10, 5));
    }
}
