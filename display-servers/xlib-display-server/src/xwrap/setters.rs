//! `XWrap` setters.
use crate::{XWrap, XlibWindowHandle};
use moodywm_core::models::{WindowHandle, WorkspaceId};
use moodywm_core::BorderColor;
use std::ffi::CString;
use std::os::raw::{c_long, c_ulong};
use x11_dl::xlib;

impl XWrap {
    // Public functions.

    /// Replaces a window property.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn replace_property_long(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
        data: &[c_long],
    ) {
        unsafe {
            (self.xlib.XChangeProperty)(
                self.display,
                window,
                property,
                r#type,
                32,
                xlib::PropModeReplace,
                data.as_ptr().cast::<u8>(),
                data.len() as i32,
            );
        }
    }

    /// Publishes `handles` as `_NET_CLIENT_LIST`.
    pub fn set_client_list(&self, handles: &[WindowHandle<XlibWindowHandle>]) {
        let list: Vec<c_long> = handles
            .iter()
            .map(|WindowHandle(XlibWindowHandle(w))| *w as c_long)
            .collect();
        self.replace_property_long(self.root, self.atoms.NetClientList, xlib::XA_WINDOW, &list);
    }

    /// Sets the current desktop.
    pub fn set_current_desktop(&self, workspace: WorkspaceId) {
        self.set_desktop_prop(&[workspace as u32], self.atoms.NetCurrentDesktop);
    }

    /// Sets a desktop property.
    // We allow the lossless cast here so that 32 bit systems may work.
    #[allow(clippy::cast_lossless)]
    pub fn set_desktop_prop(&self, data: &[u32], atom: c_ulong) {
        let x_data: Vec<c_long> = data.iter().map(|x| *x as c_long).collect();
        self.replace_property_long(self.root, atom, xlib::XA_CARDINAL, &x_data);
    }

    /// Sets a string property on a window.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn set_prop_string(
        &self,
        window: xlib::Window,
        value: &str,
        atom: c_ulong,
        encoding: xlib::Atom,
    ) {
        if let Ok(cstring) = CString::new(value) {
            unsafe {
                (self.xlib.XChangeProperty)(
                    self.display,
                    window,
                    atom,
                    encoding,
                    8,
                    xlib::PropModeReplace,
                    cstring.as_ptr().cast::<u8>(),
                    value.len() as i32,
                );
            }
        }
    }

    /// Sets a windows state.
    pub fn set_state(
        &self,
        handle: WindowHandle<XlibWindowHandle>,
        toggle_to: bool,
        atom: xlib::Atom,
    ) {
        let WindowHandle(XlibWindowHandle(h)) = handle;
        let mut states = self.get_window_states_atoms(h);
        if toggle_to {
            if states.contains(&atom) {
                return;
            }
            states.push(atom);
        } else {
            let Some(index) = states.iter().position(|s| s == &atom) else {
                return;
            };
            states.remove(index);
        }
        self.set_window_states_atoms(h, &states);
    }

    /// The pixel for a border colour, if the configured colour parsed.
    #[must_use]
    pub const fn border_pixel(&self, color: BorderColor) -> Option<c_ulong> {
        match color {
            BorderColor::Active => self.colors.active,
            BorderColor::Inactive => self.colors.inactive,
        }
    }

    /// Sets a windows border color.
    // `XSetWindowBorder`: https://tronche.com/gui/x/xlib/window/XSetWindowBorder.html
    pub fn set_window_border_color(&self, window: xlib::Window, mut color: c_ulong) {
        unsafe {
            // Force border opacity to 0xff.
            let mut bytes = color.to_le_bytes();
            bytes[3] = 0xff;
            color = c_ulong::from_le_bytes(bytes);
            (self.xlib.XSetWindowBorder)(self.display, window, color);
        }
    }

    /// Sets a windows configuration.
    pub fn set_window_config(
        &self,
        window: xlib::Window,
        mut window_changes: xlib::XWindowChanges,
        unlock: u32,
    ) {
        unsafe { (self.xlib.XConfigureWindow)(self.display, window, unlock, &mut window_changes) };
        self.sync();
    }

    /// Sets what desktop a window is on.
    pub fn set_window_desktop(&self, window: xlib::Window, workspace: WorkspaceId) {
        let indexes: Vec<c_long> = vec![workspace as c_long];
        self.replace_property_long(window, self.atoms.NetWMDesktop, xlib::XA_CARDINAL, &indexes);
    }

    /// Sets the atom states of a window.
    pub fn set_window_states_atoms(&self, window: xlib::Window, states: &[xlib::Atom]) {
        let data: Vec<c_long> = states.iter().map(|x| *x as c_long).collect();
        self.replace_property_long(window, self.atoms.NetWMState, xlib::XA_ATOM, &data);
    }

    /// Sets the `WM_STATE` of a window.
    pub fn set_wm_states(&self, window: xlib::Window, states: &[c_long]) {
        self.replace_property_long(window, self.atoms.WMState, self.atoms.WMState, states);
    }
}
