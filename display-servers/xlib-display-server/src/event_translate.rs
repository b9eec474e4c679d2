use crate::XlibWindowHandle;

use super::xwrap::{PointerMode, WITHDRAWN_STATE};
use super::{event_translate_client_message, DisplayEvent, XWrap};
use moodywm_core::models::{WindowHandle, XyhwChange};
use moodywm_core::utils::modmask_lookup::{Button, ModMask};
use std::os::raw::c_ulong;
use x11_dl::xlib;

pub struct XEvent<'a>(pub &'a mut XWrap, pub xlib::XEvent);

impl<'a> From<XEvent<'a>> for Option<DisplayEvent<XlibWindowHandle>> {
    fn from(x_event: XEvent) -> Self {
        let raw_event = x_event.1;
        let normal_mode = x_event.0.mode == PointerMode::Normal;

        match raw_event.get_type() {
            // New window is mapped.
            xlib::MapRequest => from_map_request(x_event),
            // Window is unmapped.
            xlib::UnmapNotify => from_unmap_event(x_event),
            // Window is destroyed.
            xlib::DestroyNotify => from_destroy_notify(x_event),
            // Window client message.
            xlib::ClientMessage => from_client_message(&x_event),
            // Window configure request.
            xlib::ConfigureRequest => from_configure_request(x_event),
            // Mouse entered notify.
            xlib::EnterNotify if normal_mode => from_enter_notify(&x_event),
            // Mouse motion notify.
            xlib::MotionNotify if !normal_mode => Some(from_motion_notify(x_event)),
            // Mouse button pressed.
            xlib::ButtonPress => from_button_press(raw_event),
            // Mouse button released.
            xlib::ButtonRelease => Some(DisplayEvent::ChangeToNormalMode),
            // Key pressed.
            xlib::KeyPress => Some(from_key_press(x_event)),
            // Keyboard layout changed.
            xlib::MappingNotify => from_mapping_notify(x_event),
            xlib::Expose => from_expose(&x_event),
            _other => None,
        }
    }
}

fn from_map_request(x_event: XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = x_event.0;
    let event = xlib::XMapRequestEvent::from(x_event.1);
    xw.setup_window(event.window)
}

fn from_unmap_event(x_event: XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = x_event.0;
    let event = xlib::XUnmapEvent::from(x_event.1);
    if xw.managed_windows.contains(&event.window) {
        if event.send_event == xlib::False {
            let h = WindowHandle(XlibWindowHandle(event.window));
            xw.teardown_managed_window(&h, false);
            return Some(DisplayEvent::WindowDestroy(h));
        }
        // Set WM_STATE to withdrawn state.
        xw.set_wm_states(event.window, &[WITHDRAWN_STATE]);
    }
    None
}

fn from_destroy_notify(x_event: XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = x_event.0;
    let event = xlib::XDestroyWindowEvent::from(x_event.1);
    if xw.managed_windows.contains(&event.window) {
        let h = WindowHandle(XlibWindowHandle(event.window));
        xw.teardown_managed_window(&h, true);
        return Some(DisplayEvent::WindowDestroy(h));
    }
    None
}

fn from_client_message(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XClientMessageEvent::from(x_event.1);
    event_translate_client_message::from_event(x_event.0, event)
}

fn from_configure_request(x_event: XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = x_event.0;
    let event = xlib::XConfigureRequestEvent::from(x_event.1);
    if !xw.managed_windows.contains(&event.window) {
        xw.configure_unmanaged(&event);
        return None;
    }
    let mask = event.value_mask;
    let requested = |flag: u16, value: i32| (mask & c_ulong::from(flag) != 0).then_some(value);
    let change = XyhwChange {
        x: requested(xlib::CWX, event.x),
        y: requested(xlib::CWY, event.y),
        w: requested(xlib::CWWidth, event.width),
        h: requested(xlib::CWHeight, event.height),
    };
    let handle = WindowHandle(XlibWindowHandle(event.window));
    Some(DisplayEvent::ConfigureRequest(handle, change))
}

fn from_enter_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XCrossingEvent::from(x_event.1);
    if event.mode != xlib::NotifyNormal
        || event.detail == xlib::NotifyInferior
        || event.window == x_event.0.get_default_root()
        || !x_event.0.managed_windows.contains(&event.window)
    {
        return None;
    }

    let h = WindowHandle(XlibWindowHandle(event.window));
    Some(DisplayEvent::MouseEnteredWindow(h))
}

fn from_motion_notify(x_event: XEvent) -> DisplayEvent<XlibWindowHandle> {
    let xw = x_event.0;
    let mut event = xlib::XMotionEvent::from(x_event.1);
    // Only the last queued position matters.
    if let Some(latest) = xw.get_latest_typed_event(event.window, xlib::MotionNotify) {
        event = xlib::XMotionEvent::from(latest);
    }
    DisplayEvent::Motion(event.x_root, event.y_root)
}

fn from_button_press(raw_event: xlib::XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XButtonPressedEvent::from(raw_event);
    // Presses reach us through the root grab; the target is the child under the pointer.
    if event.subwindow == 0 {
        return None;
    }
    let h = WindowHandle(XlibWindowHandle(event.subwindow));
    let mut mod_mask = event.state;
    mod_mask &= !(xlib::Mod2Mask | xlib::LockMask);
    Some(DisplayEvent::MouseCombo(
        ModMask::from_bits_retain(mod_mask as u16),
        Button::from_number(event.button),
        h,
        event.x_root,
        event.y_root,
    ))
}

fn from_key_press(x_event: XEvent) -> DisplayEvent<XlibWindowHandle> {
    let xw = x_event.0;
    let event = xlib::XKeyEvent::from(x_event.1);
    let keysym = xw.keycode_to_keysym(event.keycode);
    let mask = ModMask::from_bits_retain(event.state as u16);
    DisplayEvent::KeyCombo(mask, keysym)
}

fn from_mapping_notify(x_event: XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = x_event.0;
    let mut event = xlib::XMappingEvent::from(x_event.1);
    if let Err(err) = xw.refresh_keyboard(&mut event) {
        tracing::warn!("Unable to refresh the keyboard mapping: {}", err);
    }
    (event.request == xlib::MappingKeyboard).then_some(DisplayEvent::KeyGrabReload)
}

fn from_expose(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XExposeEvent::from(x_event.1);
    if event.count == 0 {
        x_event.0.clear_window(event.window);
    }
    None
}
