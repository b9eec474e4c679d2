use super::{Command, Config, DisplayEvent, Handle, Manager, Mode};
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::utils::modmask_lookup::ModMask;
use crate::utils::xkeysym_lookup::XKeysym;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Process a collection of events, and apply them changes to a manager.
    /// Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        tracing::trace!("Handling {:?}", event);
        match event {
            DisplayEvent::ScreenCreate(s) => self.screen_create_handler(s),
            DisplayEvent::WindowCreate(w) => self.window_created_handler(w),
            DisplayEvent::WindowDestroy(handle) => self.window_destroyed_handler(&handle),
            DisplayEvent::ConfigureRequest(handle, change) => {
                self.configure_request_handler(&handle, change)
            }

            DisplayEvent::KeyGrabReload => {
                let keybinds = self.state.keybinds.clone();
                self.state
                    .actions
                    .push_back(DisplayAction::ReloadKeyGrabs(keybinds));
                false
            }

            DisplayEvent::KeyCombo(mod_mask, xkeysym) => self
                .key_combo_command(mod_mask, xkeysym)
                .is_some_and(|cmd| self.command_handler(&cmd)),

            DisplayEvent::SendCommand(command) => self.command_handler(&command),

            DisplayEvent::MouseCombo(mod_mask, button, handle, x, y) => self
                .state
                .mouse_combo_handler(mod_mask, button, handle, x, y),

            DisplayEvent::Motion(x, y) => self.state.motion_handler(x, y),

            DisplayEvent::ChangeToNormalMode => {
                if self.state.mode == Mode::Normal {
                    return false;
                }
                self.state.mode = Mode::Normal;
                self.state.actions.push_back(DisplayAction::NormalMode);
                true
            }

            DisplayEvent::MouseEnteredWindow(handle) => {
                if self.state.mode != Mode::Normal {
                    return false;
                }
                self.state.focus_window(&handle)
            }

            DisplayEvent::FullscreenRequest(handle, action) => {
                self.fullscreen_request_handler(&handle, action)
            }
        }
    }

    /// The command of the first binding matching the key press exactly. Failing that, a
    /// `GoToWorkspace` binding pressed with an extra Shift becomes `MoveToWorkspace`.
    fn key_combo_command(&self, mod_mask: ModMask, xkeysym: XKeysym) -> Option<Command> {
        let mask = mod_mask.clean();
        let keybinds = &self.state.keybinds;
        if let Some(keybind) = keybinds.iter().find(|k| k.matches(mask, xkeysym)) {
            return Some(keybind.command.clone());
        }
        keybinds
            .iter()
            .find(|k| k.matches_shifted(mask, xkeysym))
            .and_then(|keybind| match keybind.command {
                Command::GoToWorkspace(index) => Some(Command::MoveToWorkspace(index)),
                _ => None,
            })
    }
}
