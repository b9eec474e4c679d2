use crate::models::{Handle, Screen, StateAction, Window, WindowHandle, XyhwChange};
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::utils::xkeysym_lookup::XKeysym;
use crate::Command;

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone)]
pub enum DisplayEvent<H: Handle> {
    ScreenCreate(Screen<H>),
    /// A window asked to be mapped.
    WindowCreate(Window<H>),
    WindowDestroy(WindowHandle<H>),
    ConfigureRequest(WindowHandle<H>, XyhwChange),
    /// Button press on a window, with the root pointer position.
    MouseCombo(ModMask, Button, WindowHandle<H>, i32, i32),
    /// Last root pointer position while the pointer is grabbed.
    Motion(i32, i32),
    KeyCombo(ModMask, XKeysym),
    KeyGrabReload, // Reloads keys for when keyboard changes.
    MouseEnteredWindow(WindowHandle<H>),
    FullscreenRequest(WindowHandle<H>, StateAction),
    SendCommand(Command),
    ChangeToNormalMode,
}
