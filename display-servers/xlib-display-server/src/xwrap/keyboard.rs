//! Xlib calls related to a keyboard.
use super::XlibError;
use crate::XWrap;
use moodywm_core::utils::xkeysym_lookup::XKeysym;
use moodywm_core::{Command, Keybind, ModMask};
use std::os::raw::c_ulong;
use x11_dl::xlib;

impl XWrap {
    /// Grabs the keysym with the modifier for a window.
    // `XKeysymToKeycode`: https://tronche.com/gui/x/xlib/utilities/keyboard/XKeysymToKeycode.html
    // `XGrabKey`: https://tronche.com/gui/x/xlib/input/XGrabKey.html
    pub fn grab_keys(&self, root: xlib::Window, keysym: XKeysym, modifiers: u32) {
        let code = unsafe { (self.xlib.XKeysymToKeycode)(self.display, c_ulong::from(keysym)) };
        if code == 0 {
            tracing::debug!("No keycode for keysym {:#x}", keysym);
            return;
        }
        // Grab the keys with and without numlock (Mod2).
        let mods = [
            modifiers,
            modifiers | xlib::Mod2Mask,
            modifiers | xlib::LockMask,
            modifiers | xlib::Mod2Mask | xlib::LockMask,
        ];
        for m in &mods {
            unsafe {
                (self.xlib.XGrabKey)(
                    self.display,
                    i32::from(code),
                    *m,
                    root,
                    1,
                    xlib::GrabModeAsync,
                    xlib::GrabModeAsync,
                );
            }
        }
    }

    /// Resets the key grabs to a list of keybindings. Workspace bindings are also grabbed with
    /// Shift, which turns them into a move.
    // `XUngrabKey`: https://tronche.com/gui/x/xlib/input/XUngrabKey.html
    pub fn reset_grabs(&self, keybinds: &[Keybind]) {
        // Cleanup key grabs.
        unsafe {
            (self.xlib.XUngrabKey)(self.display, xlib::AnyKey, xlib::AnyModifier, self.root);
        }

        for kb in keybinds {
            let modmask = u32::from(kb.modifier.bits());
            self.grab_keys(self.root, kb.key, modmask);
            if matches!(kb.command, Command::GoToWorkspace(_))
                && !kb.modifier.contains(ModMask::Shift)
            {
                self.grab_keys(self.root, kb.key, modmask | xlib::ShiftMask);
            }
        }
    }

    /// Updates the keyboard mapping.
    /// # Errors
    ///
    /// Will error if updating the keyboard failed.
    // `XRefreshKeyboardMapping`: https://tronche.com/gui/x/xlib/utilities/keyboard/XRefreshKeyboardMapping.html
    pub fn refresh_keyboard(&self, evt: &mut xlib::XMappingEvent) -> Result<(), XlibError> {
        let status = unsafe { (self.xlib.XRefreshKeyboardMapping)(evt) };
        if status == 0 {
            Err(XlibError::FailedStatus)
        } else {
            Ok(())
        }
    }

    /// Converts a keycode to a keysym.
    // `XkbKeycodeToKeysym`: https://linux.die.net/man/3/xkbkeycodetokeysym
    #[must_use]
    pub fn keycode_to_keysym(&self, keycode: u32) -> XKeysym {
        // Not using XKeysymToKeycode because deprecated.
        let sym = unsafe { (self.xlib.XkbKeycodeToKeysym)(self.display, keycode as u8, 0, 0) };
        sym as u32
    }
}
