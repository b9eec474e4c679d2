use serde::{Deserialize, Serialize};

/// The name of a command as written in a `[[keybind]]` table. Its argument lives in the
/// keybinding's `value` field.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    Execute,
    CloseWindow,
    FocusNextWindow,
    FocusPreviousWindow,
    SwapMaster,
    GoToWorkspace,
    MoveToWorkspace,
}
