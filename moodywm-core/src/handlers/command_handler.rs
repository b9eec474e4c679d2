use super::{Command, Config, Handle, Manager};
use crate::child_process::exec_shell;
use crate::display_servers::DisplayServer;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Processes a command and invokes the associated function.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::debug!("Command: {:?}", command);
        match command {
            Command::CloseWindow => self.close_focused(),
            Command::FocusNextWindow => self.focus_next(),
            Command::FocusPreviousWindow => self.focus_previous(),
            Command::SwapMaster => self.swap_master(),
            Command::GoToWorkspace(index) => self.state.switch_workspace(*index),
            Command::MoveToWorkspace(index) => self.move_focused_to_workspace(*index),
            Command::Execute(shell_command) => {
                exec_shell(shell_command, &mut self.children);
                false
            }
        }
    }

    fn move_focused_to_workspace(&mut self, index: usize) -> bool {
        let Some(focused) = self.display_server.focused_window() else {
            return false;
        };
        self.state.move_window_to_workspace(&focused, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Window, WindowHandle};
    use crate::DisplayAction;

    #[test]
    fn go_to_workspace_switches_the_current_workspace() {
        let mut manager = Manager::new_test_with_screen(3);
        assert!(manager.command_handler(&Command::GoToWorkspace(1)));
        assert_eq!(manager.state.workspaces.current_index(), 1);
        assert!(!manager.command_handler(&Command::GoToWorkspace(1)));
        assert!(!manager.command_handler(&Command::GoToWorkspace(3)));
    }

    #[test]
    fn move_to_workspace_sends_the_focused_window_away() {
        let mut manager = Manager::new_test_with_screen(3);
        manager.window_created_handler(Window::new(WindowHandle(1), None));
        manager.flush_actions();
        assert!(manager.command_handler(&Command::MoveToWorkspace(2)));
        let actions = manager.flush_actions();
        assert!(actions.contains(&DisplayAction::UnmapWindow(WindowHandle(1))));
        assert!(actions.contains(&DisplayAction::SetWindowDesktop(WindowHandle(1), 2)));
        assert_eq!(manager.state.workspaces.workspace_of(&WindowHandle(1)), Some(2));
    }

    #[test]
    fn close_window_kills_the_focused_window() {
        let mut manager = Manager::new_test_with_screen(1);
        manager.window_created_handler(Window::new(WindowHandle(1), None));
        manager.flush_actions();
        manager.command_handler(&Command::CloseWindow);
        assert_eq!(
            manager.flush_actions(),
            vec![DisplayAction::KillWindow(WindowHandle(1))]
        );
    }
}
