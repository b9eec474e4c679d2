use super::{Handle, WindowHandle};
use crate::display_action::DisplayAction;
use crate::models::WorkspaceId;
use crate::state::State;

impl<H: Handle> State<H> {
    /// Puts another workspace on screen.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn switch_workspace(&mut self, target: WorkspaceId) -> bool {
        let previous = match self.workspaces.switch(target) {
            Ok(previous) => previous,
            Err(err) => {
                tracing::warn!("Not switching workspace: {}", err);
                return false;
            }
        };
        tracing::debug!("Switching from workspace {} to {}", previous, target);

        let hidden = self
            .workspaces
            .get(previous)
            .map(crate::models::Workspace::handles)
            .unwrap_or_default();
        for handle in hidden {
            self.actions.push_back(DisplayAction::UnmapWindow(handle));
        }
        self.arrange();
        for handle in self.workspaces.current().handles() {
            self.actions.push_back(DisplayAction::MapWindow(handle));
        }
        self.restack();
        self.actions
            .push_back(DisplayAction::SetCurrentDesktop(target));
        self.publish_client_list();
        self.focus_master();
        true
    }

    /// Sends a window to another workspace. It stays unmapped until that workspace is shown.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn move_window_to_workspace(
        &mut self,
        handle: &WindowHandle<H>,
        target: WorkspaceId,
    ) -> bool {
        let source = match self.workspaces.move_window(handle, target) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!("Not moving window {:?}: {}", handle, err);
                return false;
            }
        };
        let current = self.workspaces.current_index();
        if source == current {
            self.actions.push_back(DisplayAction::UnmapWindow(*handle));
        }
        self.actions
            .push_back(DisplayAction::SetWindowDesktop(*handle, target));
        if source == current || target == current {
            if target == current {
                self.actions.push_back(DisplayAction::MapWindow(*handle));
            }
            self.arrange();
            self.publish_client_list();
            self.focus_master();
        }
        true
    }

    fn focus_master(&mut self) {
        match self.workspaces.current().master() {
            Some(master) => {
                self.focus_window(&master);
            }
            None => self.actions.push_back(DisplayAction::Unfocus),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Window, WindowHandle};
    use crate::{DisplayAction, Manager};

    #[test]
    fn switching_hides_the_old_windows_and_shows_the_new_ones() {
        let mut manager = Manager::new_test_with_screen(2);
        manager.window_created_handler(Window::new(WindowHandle(1), None));
        manager.state.move_window_to_workspace(&WindowHandle(1), 1);
        manager.window_created_handler(Window::new(WindowHandle(2), None));
        manager.flush_actions();

        assert!(manager.state.switch_workspace(1));
        let actions = manager.flush_actions();
        assert!(actions.contains(&DisplayAction::UnmapWindow(WindowHandle(2))));
        assert!(actions.contains(&DisplayAction::MapWindow(WindowHandle(1))));
        assert!(actions.contains(&DisplayAction::SetCurrentDesktop(1)));
        assert!(actions.contains(&DisplayAction::SetClientList(vec![WindowHandle(1)])));
        assert_eq!(manager.display_server.focused, Some(WindowHandle(1)));
    }

    #[test]
    fn switching_to_an_empty_workspace_clears_focus() {
        let mut manager = Manager::new_test_with_screen(2);
        manager.window_created_handler(Window::new(WindowHandle(1), None));
        manager.flush_actions();
        manager.state.switch_workspace(1);
        assert!(manager.flush_actions().contains(&DisplayAction::Unfocus));
        assert_eq!(manager.display_server.focused, None);
    }

    #[test]
    fn switching_to_the_current_workspace_changes_nothing() {
        let mut manager = Manager::new_test_with_screen(2);
        manager.window_created_handler(Window::new(WindowHandle(1), None));
        manager.flush_actions();
        assert!(!manager.state.switch_workspace(0));
        assert!(!manager.state.switch_workspace(5));
        assert!(manager.flush_actions().is_empty());
    }

    #[test]
    fn a_moved_window_reappears_when_its_workspace_is_shown() {
        let mut manager = Manager::new_test_with_screen(2);
        manager.window_created_handler(Window::new(WindowHandle(1), None));
        manager.window_created_handler(Window::new(WindowHandle(2), None));
        manager.flush_actions();
        assert!(manager.state.move_window_to_workspace(&WindowHandle(2), 1));
        let actions = manager.flush_actions();
        assert!(actions.contains(&DisplayAction::UnmapWindow(WindowHandle(2))));
        assert!(actions.contains(&DisplayAction::SetClientList(vec![WindowHandle(1)])));
        assert_eq!(manager.display_server.focused, Some(WindowHandle(1)));

        manager.state.switch_workspace(1);
        assert!(manager
            .flush_actions()
            .contains(&DisplayAction::MapWindow(WindowHandle(2))));
    }

    #[test]
    fn a_rejected_move_leaves_the_window_in_place() {
        let mut manager = Manager::new_test_with_screen(2);
        manager.window_created_handler(Window::new(WindowHandle(1), None));
        manager.flush_actions();
        assert!(!manager.state.move_window_to_workspace(&WindowHandle(1), 0));
        assert!(!manager.state.move_window_to_workspace(&WindowHandle(1), 9));
        assert!(manager.flush_actions().is_empty());
        assert!(manager.state.workspaces.is_current(&WindowHandle(1)));
    }
}
