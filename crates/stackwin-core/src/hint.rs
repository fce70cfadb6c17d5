use std::fmt;

/// A placement marker a window declares when it is created.
///
/// The window manager reads a window's hints once, when the window is
/// added. Hints it doesn't recognize are ignored, and a window with no
/// hints at all is cascaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Center the window on the screen, recomputed on every query.
    LocationCentered,
    /// Place the window at the next cascade position.
    LocationCascade,
    /// Keep the preferred size even if it doesn't fit on the screen.
    DontResizeToFitScreen,
    /// Draw the window without a border or title.
    NoWindowDecorations,
    /// An application-defined marker the manager doesn't interpret.
    ///
    /// Custom hints compare by name: two `Custom("modal")` values declared
    /// in different places are the same hint.
    Custom(&'static str),
}

impl Hint {
    /// Short kebab-case name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LocationCentered => "centered",
            Self::LocationCascade => "cascade",
            Self::DontResizeToFitScreen => "no-resize",
            Self::NoWindowDecorations => "no-decorations",
            Self::Custom(name) => *name,
        }
    }

    /// Looks up one of the recognized hints by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "centered" => Some(Self::LocationCentered),
            "cascade" => Some(Self::LocationCascade),
            "no-resize" => Some(Self::DontResizeToFitScreen),
            "no-decorations" => Some(Self::NoWindowDecorations),
            _ => None,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
