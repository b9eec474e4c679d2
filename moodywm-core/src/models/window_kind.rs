use super::WindowType;
use serde::{Deserialize, Serialize};

/// How a window is managed. Decided once when the window is admitted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowKind {
    /// Reserves screen space, never part of a workspace.
    Dock,
    /// Member of a workspace but skipped by the tiling engine.
    Floating,
    #[default]
    Tiled,
}

impl WindowKind {
    #[must_use]
    pub const fn classify(r#type: &WindowType, is_transient: bool) -> Self {
        match r#type {
            WindowType::Dock => Self::Dock,
            WindowType::Dialog
            | WindowType::Utility
            | WindowType::Toolbar
            | WindowType::Splash
            | WindowType::Menu
            | WindowType::Tooltip
            | WindowType::Notification => Self::Floating,
            WindowType::Desktop | WindowType::Normal if is_transient => Self::Floating,
            WindowType::Desktop | WindowType::Normal => Self::Tiled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docks_are_classified_as_docks() {
        assert_eq!(WindowKind::classify(&WindowType::Dock, false), WindowKind::Dock);
        assert_eq!(WindowKind::classify(&WindowType::Dock, true), WindowKind::Dock);
    }

    #[test]
    fn transient_popups_and_dialogs_float() {
        let floating = [
            WindowType::Dialog,
            WindowType::Utility,
            WindowType::Toolbar,
            WindowType::Splash,
            WindowType::Menu,
            WindowType::Tooltip,
            WindowType::Notification,
        ];
        for r#type in &floating {
            assert_eq!(WindowKind::classify(r#type, false), WindowKind::Floating);
        }
        assert_eq!(
            WindowKind::classify(&WindowType::Normal, true),
            WindowKind::Floating
        );
    }

    #[test]
    fn everything_else_is_tiled() {
        assert_eq!(WindowKind::classify(&WindowType::Normal, false), WindowKind::Tiled);
        assert_eq!(WindowKind::classify(&WindowType::Desktop, false), WindowKind::Tiled);
    }
}
