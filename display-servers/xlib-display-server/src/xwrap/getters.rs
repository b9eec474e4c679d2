//! `XWrap` getters.
use super::{XlibError, MAX_PROPERTY_VALUE_LEN};
use crate::{XWrap, XlibWindowHandle};
use moodywm_core::models::{BBox, Screen, WindowHandle, WindowType};
use std::ffi::CString;
use std::os::raw::{c_char, c_int, c_long, c_uchar, c_uint, c_ulong};
use std::slice;
use x11_dl::xlib;

impl XWrap {
    // Public functions.

    /// Returns the child windows of the root, bottom-most first.
    /// # Errors
    ///
    /// Will error if the window tree cannot be queried.
    // `XQueryTree`: https://tronche.com/gui/x/xlib/window-information/XQueryTree.html
    pub fn get_windows(&self) -> Result<Vec<xlib::Window>, XlibError> {
        unsafe {
            let mut root_return: xlib::Window = std::mem::zeroed();
            let mut parent_return: xlib::Window = std::mem::zeroed();
            let mut array: *mut xlib::Window = std::mem::zeroed();
            let mut length: c_uint = std::mem::zeroed();
            let status: xlib::Status = (self.xlib.XQueryTree)(
                self.display,
                self.root,
                &mut root_return,
                &mut parent_return,
                &mut array,
                &mut length,
            );
            if status == 0 {
                return Err(XlibError::FailedStatus);
            }
            if array.is_null() {
                return Ok(vec![]);
            }
            let windows = slice::from_raw_parts(array, length as usize).to_vec();
            (self.xlib.XFree)(array.cast());
            Ok(windows)
        }
    }

    /// Returns the pixel for a colour such as `#d08770`, or `None` when it cannot be parsed.
    // `XDefaultScreen`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultScreen
    // `XDefaultColormap`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultColormap
    // `XAllocNamedColor`: https://tronche.com/gui/x/xlib/color/XAllocNamedColor.html
    #[must_use]
    pub fn get_color(&self, color: String) -> Option<c_ulong> {
        let Ok(color_cstr) = CString::new(color.clone()) else {
            tracing::warn!("Invalid border colour {:?}", color);
            return None;
        };
        let status = unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            let cmap: xlib::Colormap = (self.xlib.XDefaultColormap)(self.display, screen);
            let mut exact: xlib::XColor = std::mem::zeroed();
            let mut screen_color: xlib::XColor = std::mem::zeroed();
            let status = (self.xlib.XAllocNamedColor)(
                self.display,
                cmap,
                color_cstr.as_ptr(),
                &mut screen_color,
                &mut exact,
            );
            (status != 0).then_some(screen_color.pixel)
        };
        if status.is_none() {
            tracing::warn!("Invalid border colour {:?}", color);
        }
        status
    }

    /// Returns the handle of the default root.
    #[must_use]
    pub const fn get_default_root_handle(&self) -> WindowHandle<XlibWindowHandle> {
        WindowHandle(XlibWindowHandle(self.root))
    }

    /// Returns the default root.
    #[must_use]
    pub const fn get_default_root(&self) -> xlib::Window {
        self.root
    }

    /// Returns the window holding input focus, `None` when focus is on nothing or follows the
    /// pointer.
    // `XGetInputFocus`: https://tronche.com/gui/x/xlib/input/XGetInputFocus.html
    #[must_use]
    pub fn get_input_focus(&self) -> Option<xlib::Window> {
        let mut window: xlib::Window = 0;
        let mut revert_to: c_int = 0;
        unsafe { (self.xlib.XGetInputFocus)(self.display, &mut window, &mut revert_to) };
        match window {
            0 | 1 => None, // None, PointerRoot
            w => Some(w),
        }
    }

    /// Returns the next `Xevent` of the xserver.
    // `XNextEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XNextEvent.html
    #[must_use]
    pub fn get_next_event(&self) -> xlib::XEvent {
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            (self.xlib.XNextEvent)(self.display, &mut event);
            event
        }
    }

    /// Takes the newest queued event of a type for a window, dropping the older ones.
    // `XCheckTypedWindowEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XCheckTypedWindowEvent.html
    #[must_use]
    pub fn get_latest_typed_event(
        &self,
        window: xlib::Window,
        event_type: c_int,
    ) -> Option<xlib::XEvent> {
        let mut latest = None;
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            while (self.xlib.XCheckTypedWindowEvent)(self.display, window, event_type, &mut event)
                != 0
            {
                latest = Some(event);
            }
        }
        latest
    }

    /// Returns the screen windows are arranged on: the root geometry.
    /// # Errors
    ///
    /// Errors when the root attributes cannot be read.
    pub fn get_screen(&self) -> Result<Screen<XlibWindowHandle>, XlibError> {
        let attrs = self
            .get_window_attrs(self.root)
            .map_err(|_| XlibError::RootWindowNotFound)?;
        let bbox = BBox {
            x: attrs.x,
            y: attrs.y,
            width: attrs.width,
            height: attrs.height,
        };
        Ok(Screen::new(self.get_default_root_handle(), bbox))
    }

    /// Returns the transient parent of a window.
    // `XGetTransientForHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTransientForHint.html
    #[must_use]
    pub fn get_transient_for(&self, window: xlib::Window) -> Option<xlib::Window> {
        unsafe {
            let mut transient: xlib::Window = std::mem::zeroed();
            let status: c_int =
                (self.xlib.XGetTransientForHint)(self.display, window, &mut transient);
            if status > 0 && transient != 0 {
                Some(transient)
            } else {
                None
            }
        }
    }

    /// Returns the attributes of a window.
    /// # Errors
    ///
    /// Will error if window status is 0 (no attributes).
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xlib::Window,
    ) -> Result<xlib::XWindowAttributes, XlibError> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return Err(XlibError::FailedStatus);
        }
        Ok(attrs)
    }

    /// Returns a windows name.
    #[must_use]
    pub fn get_window_name(&self, window: xlib::Window) -> Option<String> {
        if let Ok(text) = self.get_text_prop(window, self.atoms.NetWMName) {
            return Some(text);
        }
        if let Ok(text) = self.get_text_prop(window, xlib::XA_WM_NAME) {
            return Some(text);
        }
        None
    }

    /// Returns the atom states of a window.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    #[must_use]
    pub fn get_window_states_atoms(&self, window: xlib::Window) -> Vec<xlib::Atom> {
        let Ok((prop_return, nitems_return)) =
            self.get_property(window, self.atoms.NetWMState, xlib::XA_ATOM)
        else {
            return vec![];
        };
        unsafe {
            #[allow(clippy::cast_ptr_alignment)]
            let ptr = prop_return.cast::<c_ulong>();
            slice::from_raw_parts(ptr, nitems_return as usize).to_vec()
        }
    }

    /// Returns the type of a window. Missing or unknown hints read as `Normal`.
    #[must_use]
    pub fn get_window_type(&self, window: xlib::Window) -> WindowType {
        let mut atom = None;
        if let Ok((prop_return, nitems)) =
            self.get_property(window, self.atoms.NetWMWindowType, xlib::XA_ATOM)
        {
            if nitems > 0 {
                #[allow(clippy::cast_ptr_alignment)]
                let atom_ = unsafe { *prop_return.cast::<xlib::Atom>() };
                atom = Some(atom_);
            }
        }
        match atom {
            x if x == Some(self.atoms.NetWMWindowTypeDesktop) => WindowType::Desktop,
            x if x == Some(self.atoms.NetWMWindowTypeDock) => WindowType::Dock,
            x if x == Some(self.atoms.NetWMWindowTypeToolbar) => WindowType::Toolbar,
            x if x == Some(self.atoms.NetWMWindowTypeMenu) => WindowType::Menu,
            x if x == Some(self.atoms.NetWMWindowTypeUtility) => WindowType::Utility,
            x if x == Some(self.atoms.NetWMWindowTypeSplash) => WindowType::Splash,
            x if x == Some(self.atoms.NetWMWindowTypeDialog) => WindowType::Dialog,
            x if x == Some(self.atoms.NetWMWindowTypeTooltip) => WindowType::Tooltip,
            x if x == Some(self.atoms.NetWMWindowTypeNotification) => WindowType::Notification,
            _ => WindowType::Normal,
        }
    }

    /// Returns the `WM_STATE` of a window.
    #[must_use]
    pub fn get_wm_state(&self, window: xlib::Window) -> Option<c_long> {
        let (prop_return, nitems_return) = self
            .get_property(window, self.atoms.WMState, self.atoms.WMState)
            .ok()?;
        if nitems_return == 0 {
            return None;
        }
        #[allow(clippy::cast_ptr_alignment)]
        Some(unsafe { *prop_return.cast::<c_long>() })
    }

    /// Returns the name of a `XAtom`.
    /// # Errors
    ///
    /// Errors if `XAtom` is not valid.
    // `XGetAtomName`: https://tronche.com/gui/x/xlib/window-information/XGetAtomName.html
    pub fn get_xatom_name(&self, atom: xlib::Atom) -> Result<String, XlibError> {
        unsafe {
            let cstring = (self.xlib.XGetAtomName)(self.display, atom);
            if cstring.is_null() {
                return Err(XlibError::InvalidXAtom);
            }
            if let Ok(s) = CString::from_raw(cstring).into_string() {
                return Ok(s);
            }
        };
        Err(XlibError::InvalidXAtom)
    }

    // Internal functions.

    /// Returns a property of a window.
    /// # Errors
    ///
    /// Errors if window status = 0.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    fn get_property(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
    ) -> Result<(*const c_uchar, c_ulong), XlibError> {
        let mut format_return: i32 = 0;
        let mut nitems_return: c_ulong = 0;
        let mut type_return: xlib::Atom = 0;
        let mut bytes_after_return: xlib::Atom = 0;
        let mut prop_return: *mut c_uchar = unsafe { std::mem::zeroed() };
        unsafe {
            let status = (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                property,
                0,
                MAX_PROPERTY_VALUE_LEN / 4,
                xlib::False,
                r#type,
                &mut type_return,
                &mut format_return,
                &mut nitems_return,
                &mut bytes_after_return,
                &mut prop_return,
            );
            if status == i32::from(xlib::Success) && !prop_return.is_null() {
                return Ok((prop_return, nitems_return));
            }
        };
        Err(XlibError::FailedStatus)
    }

    /// Returns a text property for a window.
    /// # Errors
    ///
    /// Errors if window status = 0.
    // `XGetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTextProperty.html
    fn get_text_prop(&self, window: xlib::Window, atom: xlib::Atom) -> Result<String, XlibError> {
        unsafe {
            let mut text_prop: xlib::XTextProperty = std::mem::zeroed();
            let status: c_int =
                (self.xlib.XGetTextProperty)(self.display, window, &mut text_prop, atom);
            if status == 0 || text_prop.value.is_null() {
                return Err(XlibError::FailedStatus);
            }
            if let Ok(s) = CString::from_raw(text_prop.value.cast::<c_char>()).into_string() {
                return Ok(s);
            }
        };
        Err(XlibError::FailedStatus)
    }
}
