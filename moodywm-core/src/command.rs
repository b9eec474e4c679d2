use crate::models::WorkspaceId;
use serde::{Deserialize, Serialize};

/// Things a keybinding or a client message can ask the manager to do.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    CloseWindow,
    FocusNextWindow,
    FocusPreviousWindow,
    SwapMaster,
    GoToWorkspace(WorkspaceId),
    MoveToWorkspace(WorkspaceId),
    Execute(String),
}
