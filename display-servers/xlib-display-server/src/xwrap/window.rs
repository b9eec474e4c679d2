//! Xlib calls related to a window.
use super::{
    on_error_from_xlib, on_error_from_xlib_dummy, ICONIC_STATE, NORMAL_STATE, ROOT_EVENT_MASK,
    WITHDRAWN_STATE,
};
use crate::{XWrap, XlibWindowHandle};
use moodywm_core::models::{Window, WindowHandle, WindowKind, Xyhw};
use moodywm_core::DisplayEvent;
use std::os::raw::{c_long, c_ulong};
use x11_dl::xlib;

impl XWrap {
    /// Sets up a window before we manage it. Override-redirect and already managed windows are
    /// skipped.
    #[must_use]
    pub fn setup_window(&self, window: xlib::Window) -> Option<DisplayEvent<XlibWindowHandle>> {
        // Check that the window isn't requesting to be unmanaged
        let attrs = match self.get_window_attrs(window) {
            Ok(attr) if attr.override_redirect == 0 && !self.managed_windows.contains(&window) => {
                attr
            }
            _ => return None,
        };
        let handle = WindowHandle(XlibWindowHandle(window));
        let mut w = Window::new(handle, self.get_window_name(window));
        w.r#type = self.get_window_type(window);
        w.transient = self
            .get_transient_for(window)
            .map(|trans| WindowHandle(XlibWindowHandle(trans)));
        // The pre-mapped geometry is what the client asked for.
        let requested = Xyhw::new(attrs.x, attrs.y, attrs.width, attrs.height);
        w.normal = requested;
        w.requested = Some(requested);
        Some(DisplayEvent::WindowCreate(w))
    }

    /// Sets up a window that we want to manage.
    // `XMapWindow`: https://tronche.com/gui/x/xlib/window/XMapWindow.html
    pub fn setup_managed_window(&mut self, h: WindowHandle<XlibWindowHandle>, kind: WindowKind) {
        let WindowHandle(XlibWindowHandle(handle)) = h;
        if kind != WindowKind::Dock {
            self.subscribe_to_window_events(handle);
            if let Some(pixel) = self.colors.inactive {
                self.set_window_border_color(handle, pixel);
            }
        }
        self.managed_windows.push(handle);

        // Make sure there is at least an empty list of _NET_WM_STATE.
        let states = self.get_window_states_atoms(handle);
        self.set_window_states_atoms(handle, &states);
        self.toggle_window_visibility(handle, true);
    }

    /// Teardown a managed window when it is unmapped or destroyed.
    // `XGrabServer`: https://tronche.com/gui/x/xlib/window-and-session-manager/XGrabServer.html
    // `XUngrabServer`: https://tronche.com/gui/x/xlib/window-and-session-manager/XUngrabServer.html
    pub fn teardown_managed_window(&mut self, h: &WindowHandle<XlibWindowHandle>, destroyed: bool) {
        let WindowHandle(XlibWindowHandle(handle)) = h;
        self.managed_windows.retain(|x| *x != *handle);
        if !destroyed {
            unsafe {
                (self.xlib.XGrabServer)(self.display);
                (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib_dummy));
                self.set_wm_states(*handle, &[WITHDRAWN_STATE]);
                self.sync();
                (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib));
                (self.xlib.XUngrabServer)(self.display);
            }
        }
    }

    /// Applies the geometry and border of a window.
    pub fn update_window(&self, window: &Window<XlibWindowHandle>) {
        let WindowHandle(XlibWindowHandle(handle)) = window.handle;
        let changes = xlib::XWindowChanges {
            x: window.x(),
            y: window.y(),
            width: window.width(),
            height: window.height(),
            border_width: window.border(),
            sibling: 0,    // Not unlocked.
            stack_mode: 0, // Not unlocked.
        };
        let unlock = xlib::CWX | xlib::CWY | xlib::CWWidth | xlib::CWHeight | xlib::CWBorderWidth;
        self.set_window_config(handle, changes, u32::from(unlock));
        self.configure_window(window);
    }

    /// Maps or unmaps a window without hearing about it from the root.
    pub fn toggle_window_visibility(&self, window: xlib::Window, visible: bool) {
        // We don't want to receive this map or unmap event.
        let mask_off = ROOT_EVENT_MASK & !(xlib::SubstructureNotifyMask);
        let mut attrs: xlib::XSetWindowAttributes = unsafe { std::mem::zeroed() };
        attrs.event_mask = mask_off;
        self.change_window_attributes(self.root, xlib::CWEventMask, attrs);
        if visible {
            // Set WM_STATE to normal state.
            self.set_wm_states(window, &[NORMAL_STATE]);
            // Make sure the window is mapped.
            unsafe { (self.xlib.XMapWindow)(self.display, window) };
        } else {
            // Make sure the window is unmapped.
            unsafe { (self.xlib.XUnmapWindow)(self.display, window) };
            // Set WM_STATE to iconic state.
            self.set_wm_states(window, &[ICONIC_STATE]);
        }
        attrs.event_mask = ROOT_EVENT_MASK;
        self.change_window_attributes(self.root, xlib::CWEventMask, attrs);
    }

    /// Makes a window take focus.
    pub fn window_take_focus(&mut self, window: &Window<XlibWindowHandle>) {
        let WindowHandle(XlibWindowHandle(handle)) = window.handle;
        self.focus(handle);
        self.sync();
    }

    /// Focuses a window.
    // `XSetInputFocus`: https://tronche.com/gui/x/xlib/input/XSetInputFocus.html
    pub fn focus(&mut self, window: xlib::Window) {
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                window,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
        }
        // Mark this window as the `_NET_ACTIVE_WINDOW`
        self.replace_property_long(
            self.root,
            self.atoms.NetActiveWindow,
            xlib::XA_WINDOW,
            &[window as c_long],
        );
        // Tell the window to take focus
        self.send_xevent_atom(window, self.atoms.WMTakeFocus);
    }

    /// Unfocuses all windows.
    // `XSetInputFocus`: https://tronche.com/gui/x/xlib/input/XSetInputFocus.html
    // `XDeleteProperty`: https://tronche.com/gui/x/xlib/window-information/XDeleteProperty.html
    pub fn unfocus(&mut self) {
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                self.root,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
            (self.xlib.XDeleteProperty)(self.display, self.root, self.atoms.NetActiveWindow);
        }
    }

    /// Send a `XConfigureEvent` for a window to X.
    pub fn configure_window(&self, window: &Window<XlibWindowHandle>) {
        let WindowHandle(XlibWindowHandle(handle)) = window.handle;
        let mut configure_event: xlib::XConfigureEvent = unsafe { std::mem::zeroed() };
        configure_event.type_ = xlib::ConfigureNotify;
        configure_event.display = self.display;
        configure_event.event = handle;
        configure_event.window = handle;
        configure_event.x = window.x();
        configure_event.y = window.y();
        configure_event.width = window.width();
        configure_event.height = window.height();
        configure_event.border_width = window.border();
        configure_event.above = 0;
        configure_event.override_redirect = 0;
        self.send_xevent(
            handle,
            0,
            xlib::StructureNotifyMask,
            &mut configure_event.into(),
        );
    }

    /// Configures a window we do not manage exactly as it asked.
    pub fn configure_unmanaged(&self, event: &xlib::XConfigureRequestEvent) {
        let window_changes = xlib::XWindowChanges {
            x: event.x,
            y: event.y,
            width: event.width,
            height: event.height,
            border_width: event.border_width,
            sibling: event.above,
            stack_mode: event.detail,
        };
        self.set_window_config(event.window, window_changes, event.value_mask as u32);
    }

    /// Change a windows attributes.
    // `XChangeWindowAttributes`: https://tronche.com/gui/x/xlib/window/XChangeWindowAttributes.html
    pub fn change_window_attributes(
        &self,
        window: xlib::Window,
        mask: c_ulong,
        mut attrs: xlib::XSetWindowAttributes,
    ) {
        unsafe {
            (self.xlib.XChangeWindowAttributes)(self.display, window, mask, &mut attrs);
        }
    }

    /// Restacks the windows to the order of the vec, top-most first.
    // `XRestackWindows`: https://tronche.com/gui/x/xlib/window/XRestackWindows.html
    pub fn restack(&self, handles: Vec<WindowHandle<XlibWindowHandle>>) {
        let mut windows: Vec<xlib::Window> = handles
            .into_iter()
            .map(|WindowHandle(XlibWindowHandle(window))| window)
            .collect();
        let size = windows.len();
        let ptr = windows.as_mut_ptr();
        unsafe {
            (self.xlib.XRestackWindows)(self.display, ptr, size as i32);
        }
    }

    /// Kills a window.
    // `XGrabServer`: https://tronche.com/gui/x/xlib/window-and-session-manager/XGrabServer.html
    // `XSetCloseDownMode`: https://tronche.com/gui/x/xlib/display/XSetCloseDownMode.html
    // `XKillClient`: https://tronche.com/gui/x/xlib/window-and-session-manager/XKillClient.html
    // `XUngrabServer`: https://tronche.com/gui/x/xlib/window-and-session-manager/XUngrabServer.html
    pub fn kill_window(&self, h: &WindowHandle<XlibWindowHandle>) {
        let WindowHandle(XlibWindowHandle(handle)) = h;
        // Nicely ask the window to close.
        if !self.send_xevent_atom(*handle, self.atoms.WMDelete) {
            // Force kill the window.
            unsafe {
                (self.xlib.XGrabServer)(self.display);
                (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib_dummy));
                (self.xlib.XSetCloseDownMode)(self.display, xlib::DestroyAll);
                (self.xlib.XKillClient)(self.display, *handle);
                self.sync();
                (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib));
                (self.xlib.XUngrabServer)(self.display);
            }
        }
    }

    /// Clears the exposed area of a window.
    // `XClearWindow`: https://tronche.com/gui/x/xlib/graphics/XClearWindow.html
    pub fn clear_window(&self, window: xlib::Window) {
        unsafe { (self.xlib.XClearWindow)(self.display, window) };
    }

    /// Subscribe to an event of a window.
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn subscribe_to_event(&self, window: xlib::Window, mask: c_long) {
        unsafe { (self.xlib.XSelectInput)(self.display, window, mask) };
    }

    /// Subscribe to the wanted events of a window.
    pub fn subscribe_to_window_events(&self, window: xlib::Window) {
        self.subscribe_to_event(window, xlib::EnterWindowMask);
    }
}
