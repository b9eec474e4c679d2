use crate::XlibWindowHandle;

use super::{DisplayEvent, XWrap};
use moodywm_core::models::{StateAction, WindowHandle};
use moodywm_core::Command;
use std::convert::TryFrom;
use std::os::raw::c_long;

use x11_dl::xlib;

pub fn from_event(
    xw: &XWrap,
    event: xlib::XClientMessageEvent,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    if !xw.managed_windows.contains(&event.window) && event.window != xw.get_default_root() {
        return None;
    }
    if tracing::enabled!(tracing::Level::TRACE) {
        let atom_name = xw.get_xatom_name(event.message_type);
        tracing::trace!("ClientMessage: {} : {:?}", event.window, atom_name);
    }

    if event.message_type == xw.atoms.NetCurrentDesktop {
        let value = event.data.get_long(0);
        return match usize::try_from(value) {
            Ok(index) => Some(DisplayEvent::SendCommand(Command::GoToWorkspace(index))),
            Err(err) => {
                tracing::debug!(
                    "Received invalid value for current desktop new index ({}): {}",
                    value,
                    err,
                );
                None
            }
        };
    }

    let fullscreen = xw.atoms.NetWMStateFullscreen as c_long;
    if event.message_type == xw.atoms.NetWMState
        && xw.managed_windows.contains(&event.window)
        && (event.data.get_long(1) == fullscreen || event.data.get_long(2) == fullscreen)
    {
        let Some(action) = StateAction::from_ewmh(event.data.get_long(0)) else {
            tracing::debug!("Unknown _NET_WM_STATE action {}", event.data.get_long(0));
            return None;
        };
        let handle = WindowHandle(XlibWindowHandle(event.window));
        return Some(DisplayEvent::FullscreenRequest(handle, action));
    }

    None
}
