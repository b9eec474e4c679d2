use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowState {
    Fullscreen,
}

/// What a `_NET_WM_STATE` client message asks for. Values follow the EWMH encoding.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StateAction {
    Remove,
    Add,
    Toggle,
}

impl StateAction {
    #[must_use]
    pub const fn from_ewmh(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Remove),
            1 => Some(Self::Add),
            2 => Some(Self::Toggle),
            _ => None,
        }
    }

    /// Whether the state should be set, given whether it is set now.
    #[must_use]
    pub const fn resolve(self, current: bool) -> bool {
        match self {
            Self::Remove => false,
            Self::Add => true,
            Self::Toggle => !current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_the_current_state() {
        assert!(StateAction::Toggle.resolve(false));
        assert!(!StateAction::Toggle.resolve(true));
        assert!(StateAction::Add.resolve(true));
        assert!(!StateAction::Remove.resolve(true));
    }

    #[test]
    fn unknown_ewmh_actions_are_ignored() {
        assert_eq!(StateAction::from_ewmh(1), Some(StateAction::Add));
        assert_eq!(StateAction::from_ewmh(3), None);
    }
}
