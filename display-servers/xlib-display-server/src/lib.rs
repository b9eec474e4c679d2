// allow casting types
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod event_translate;
mod event_translate_client_message;
mod xatom;
mod xcursor;
mod xwrap;

use serde::{Deserialize, Serialize};
pub use xwrap::{XWrap, XlibError};

use self::xwrap::{PointerMode, ICONIC_STATE};
use event_translate::XEvent;
use futures::prelude::*;
use moodywm_core::config::Config;
use moodywm_core::models::{Handle, Window, WindowHandle, WindowKind, WindowState};
use moodywm_core::{BorderColor, DisplayAction, DisplayEvent, DisplayServer, MoodyError};
use std::pin::Pin;

use x11_dl::xlib;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XlibWindowHandle(xlib::Window);
impl Handle for XlibWindowHandle {}

pub struct XlibDisplayServer {
    xw: XWrap,
    root: xlib::Window,
    initial_events: Vec<DisplayEvent<XlibWindowHandle>>,
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn new(config: &impl Config) -> moodywm_core::Result<Self> {
        let mut wrap =
            XWrap::new().map_err(|err| MoodyError::DisplayServer(err.to_string()))?;

        wrap.init(config); // setup events masks

        let root = wrap.get_default_root();
        let instance = Self {
            xw: wrap,
            root,
            initial_events: Vec::new(),
        };
        let initial_events = instance.initial_events();

        Ok(Self {
            initial_events,
            ..instance
        })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        let mut events = std::mem::take(&mut self.initial_events);

        let events_in_queue = self.xw.queue_len();
        for _ in 0..events_in_queue {
            let xlib_event = self.xw.get_next_event();
            let event = XEvent(&mut self.xw, xlib_event).into();
            if let Some(e) = event {
                tracing::trace!("DisplayEvent: {:?}", e);
                events.push(e);
            }
        }

        events
    }

    fn execute_action(
        &mut self,
        act: DisplayAction<XlibWindowHandle>,
    ) -> Option<DisplayEvent<XlibWindowHandle>> {
        tracing::trace!("DisplayAction: {:?}", act);
        let xw = &mut self.xw;
        let event: Option<DisplayEvent<XlibWindowHandle>> = match act {
            DisplayAction::KillWindow(h) => from_kill_window(xw, h),
            DisplayAction::AddedWindow(h, kind) => from_added_window(xw, h, kind),
            DisplayAction::UpdateWindow(w) => from_update_window(xw, &w),
            DisplayAction::ConfigureXlibWindow(w) => from_configure_xlib_window(xw, &w),
            DisplayAction::MapWindow(h) => from_map_window(xw, h, true),
            DisplayAction::UnmapWindow(h) => from_map_window(xw, h, false),
            DisplayAction::SetBorderColor(h, c) => from_set_border_color(xw, h, c),
            DisplayAction::SetState(h, t, s) => from_set_state(xw, h, t, s),
            DisplayAction::SetWindowOrder(ws) => from_set_window_order(xw, ws),
            DisplayAction::WindowTakeFocus(w) => from_window_take_focus(xw, &w),
            DisplayAction::Unfocus => from_unfocus(xw),
            DisplayAction::ReadyToMoveWindow(_) => from_pointer_mode(xw, PointerMode::Moving),
            DisplayAction::ReadyToResizeWindow(_) => {
                from_pointer_mode(xw, PointerMode::Resizing)
            }
            DisplayAction::NormalMode => from_pointer_mode(xw, PointerMode::Normal),
            DisplayAction::SetCurrentDesktop(id) => {
                xw.set_current_desktop(id);
                None
            }
            DisplayAction::SetClientList(hs) => {
                xw.set_client_list(&hs);
                None
            }
            DisplayAction::SetWindowDesktop(WindowHandle(XlibWindowHandle(w)), id) => {
                xw.set_window_desktop(w, id);
                None
            }
            DisplayAction::ReloadKeyGrabs(keybinds) => {
                xw.reset_grabs(&keybinds);
                None
            }
        };
        if event.is_some() {
            tracing::trace!("DisplayEvent: {:?}", event);
        }
        event
    }

    fn focused_window(&self) -> Option<WindowHandle<XlibWindowHandle>> {
        self.xw
            .get_input_focus()
            .filter(|w| *w != self.root)
            .map(|w| WindowHandle(XlibWindowHandle(w)))
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        let task_notify = self.xw.task_notify.clone();
        Box::pin(async move {
            task_notify.notified().await;
        })
    }

    fn flush(&self) {
        self.xw.flush();
    }
}

impl XlibDisplayServer {
    /// Return a vec of events for setting up state of WM.
    fn initial_events(&self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        let mut events = vec![];
        match self.xw.get_screen() {
            Ok(screen) => events.push(DisplayEvent::ScreenCreate(screen)),
            Err(err) => tracing::error!("Unable to read the root geometry: {}", err),
        }

        // Tell manager about existing windows.
        events.append(&mut self.find_all_windows());

        events
    }

    fn find_all_windows(&self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        let mut all: Vec<DisplayEvent<XlibWindowHandle>> = Vec::new();
        match self.xw.get_windows() {
            Ok(handles) => handles.into_iter().for_each(|handle| {
                let Ok(attrs) = self.xw.get_window_attrs(handle) else {
                    return;
                };
                let state = self.xw.get_wm_state(handle);
                if attrs.map_state == xlib::IsViewable || state == Some(ICONIC_STATE) {
                    if let Some(event) = self.xw.setup_window(handle) {
                        all.push(event);
                    }
                }
            }),
            Err(err) => {
                tracing::error!("Unable to list existing windows: {}", err);
            }
        }
        all
    }
}

// Display actions.
fn from_kill_window(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.kill_window(&handle);
    None
}

fn from_added_window(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    kind: WindowKind,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.setup_managed_window(handle, kind);
    None
}

fn from_update_window(
    xw: &mut XWrap,
    window: &Window<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.update_window(window);
    None
}

fn from_configure_xlib_window(
    xw: &mut XWrap,
    window: &Window<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.configure_window(window);
    None
}

fn from_map_window(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    visible: bool,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.toggle_window_visibility(window, visible);
    None
}

fn from_set_border_color(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    color: BorderColor,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    // Unparsable colours were reported when they were loaded.
    if let Some(pixel) = xw.border_pixel(color) {
        xw.set_window_border_color(window, pixel);
    }
    None
}

fn from_set_state(
    xw: &mut XWrap,
    handle: WindowHandle<XlibWindowHandle>,
    toggle_to: bool,
    window_state: WindowState,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    let state = match window_state {
        WindowState::Fullscreen => xw.atoms.NetWMStateFullscreen,
    };
    xw.set_state(handle, toggle_to, state);
    None
}

fn from_set_window_order(
    xw: &mut XWrap,
    windows: Vec<WindowHandle<XlibWindowHandle>>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    // Docks and unmanaged windows.
    let unmanaged: Vec<WindowHandle<XlibWindowHandle>> = xw
        .get_windows()
        .unwrap_or_default()
        .iter()
        .filter(|&w| *w != xw.get_default_root())
        .map(|&w| WindowHandle(XlibWindowHandle(w)))
        .filter(|h| !windows.iter().any(|w| w == h))
        .collect();
    // Unmanaged windows on top.
    xw.restack([unmanaged, windows].concat());
    None
}

fn from_window_take_focus(
    xw: &mut XWrap,
    window: &Window<XlibWindowHandle>,
) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.window_take_focus(window);
    None
}

fn from_unfocus(xw: &mut XWrap) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.unfocus();
    None
}

fn from_pointer_mode(xw: &mut XWrap, mode: PointerMode) -> Option<DisplayEvent<XlibWindowHandle>> {
    xw.set_mode(mode);
    None
}
