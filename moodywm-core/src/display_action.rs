use crate::config::Keybind;
use crate::models::{Handle, Window, WindowHandle, WindowKind, WindowState, WorkspaceId};
use serde::{Deserialize, Serialize};

/// Which border colour to paint.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderColor {
    Active,
    Inactive,
}

/// These are responses from the Window manager.
/// The display server should act on these actions.
#[allow(clippy::large_enum_variant)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction<H: Handle> {
    /// Nicely ask a window if it would please close at its convenience.
    #[serde(bound = "")]
    KillWindow(WindowHandle<H>),

    /// Get triggered after a new window is discovered and WE are
    /// managing it. Subscribes to its events and maps it.
    #[serde(bound = "")]
    AddedWindow(WindowHandle<H>, WindowKind),

    /// Apply the geometry and border width of a window.
    #[serde(bound = "")]
    UpdateWindow(Window<H>),

    /// Send a synthetic configure notify reporting the current geometry.
    #[serde(bound = "")]
    ConfigureXlibWindow(Window<H>),

    #[serde(bound = "")]
    MapWindow(WindowHandle<H>),

    #[serde(bound = "")]
    UnmapWindow(WindowHandle<H>),

    #[serde(bound = "")]
    SetBorderColor(WindowHandle<H>, BorderColor),

    /// Change a windows state.
    #[serde(bound = "")]
    SetState(WindowHandle<H>, bool, WindowState),

    /// Sets the "z-index" order of the windows
    /// first in the array is top most
    #[serde(bound = "")]
    SetWindowOrder(Vec<WindowHandle<H>>),

    /// Tell a window that it is to become focused.
    #[serde(bound = "")]
    WindowTakeFocus(Window<H>),

    /// Remove focus on any visible window by focusing the root window.
    Unfocus,

    /// Tell the DM we are ready to resize this window.
    #[serde(bound = "")]
    ReadyToResizeWindow(WindowHandle<H>),

    /// Tell the DM we are ready to move this window.
    #[serde(bound = "")]
    ReadyToMoveWindow(WindowHandle<H>),

    /// Tell the DM to return to normal mode if it is not (ie resize a
    /// window or moving a window).
    NormalMode,

    /// Publish the workspace on screen.
    SetCurrentDesktop(WorkspaceId),

    /// Publish the managed windows of the workspace on screen.
    #[serde(bound = "")]
    SetClientList(Vec<WindowHandle<H>>),

    /// Publish the workspace a window lives on.
    #[serde(bound = "")]
    SetWindowDesktop(WindowHandle<H>, WorkspaceId),

    /// Grab the keys of these bindings again, after the keyboard mapping changed.
    ReloadKeyGrabs(Vec<Keybind>),
}
