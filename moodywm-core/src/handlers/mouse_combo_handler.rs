use super::{Handle, Mode, WindowHandle};
use crate::display_action::DisplayAction;
use crate::models::Drag;
use crate::state::State;
use crate::utils::modmask_lookup::{Button, ModMask};

impl<H: Handle> State<H> {
    /// Starts moving or resizing a window of the workspace on screen.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn mouse_combo_handler(
        &mut self,
        modmask: ModMask,
        button: Button,
        handle: WindowHandle<H>,
        x: i32,
        y: i32,
    ) -> bool {
        if self.mode != Mode::Normal || !modmask.clean().contains(self.mousekey) {
            return false;
        }
        let Some(window) = self.workspaces.current().find(&handle) else {
            return false;
        };
        if window.is_fullscreen() {
            return false;
        }
        let drag = Drag {
            handle,
            origin: (x, y),
            start: window.calculated_xyhw(),
        };
        if button == self.resize_button {
            self.mode = Mode::ResizingWindow(drag);
            let act = DisplayAction::ReadyToResizeWindow(handle);
            self.actions.push_back(act);
        } else if button == self.move_button {
            self.mode = Mode::MovingWindow(drag);
            let act = DisplayAction::ReadyToMoveWindow(handle);
            self.actions.push_back(act);
        } else {
            return false;
        }
        tracing::debug!("Drag started: {:?}", self.mode);
        self.focus_window(&handle);
        true
    }

    /// Follows the pointer while a drag is in progress.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn motion_handler(&mut self, x: i32, y: i32) -> bool {
        let (handle, xyhw) = match &self.mode {
            Mode::MovingWindow(drag) => (drag.handle, drag.moved_to(x, y)),
            Mode::ResizingWindow(drag) => (drag.handle, drag.resized_to(x, y)),
            Mode::Normal => return false,
        };
        let Some(window) = self.workspaces.find_window_mut(&handle) else {
            self.mode = Mode::Normal;
            self.actions.push_back(DisplayAction::NormalMode);
            return false;
        };
        window.set_inner_xyhw(xyhw);
        let act = DisplayAction::UpdateWindow(window.clone());
        self.actions.push_back(act);
        true
    }
}
