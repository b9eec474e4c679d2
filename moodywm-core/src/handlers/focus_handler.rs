use super::{Config, Handle, Manager, WindowHandle};
use crate::display_action::{BorderColor, DisplayAction};
use crate::display_servers::DisplayServer;
use crate::state::State;

impl<H: Handle> State<H> {
    /// Focuses a window of the workspace on screen. Docks and windows of other workspaces are
    /// ignored.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn focus_window(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(window) = self.workspaces.current().find(handle).cloned() else {
            return false;
        };
        for other in self.workspaces.current().handles() {
            let act = DisplayAction::SetBorderColor(other, BorderColor::Inactive);
            self.actions.push_back(act);
        }
        let act = DisplayAction::SetBorderColor(*handle, BorderColor::Active);
        self.actions.push_back(act);
        self.actions.push_back(DisplayAction::WindowTakeFocus(window));
        self.restack();
        true
    }
}

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Moves focus one window forward or back in the workspace on screen, wrapping around.
    fn focus_relative(&mut self, forward: bool) -> bool {
        let workspace = self.state.workspaces.current();
        let count = workspace.len();
        if count == 0 {
            return false;
        }
        let focused = self
            .display_server
            .focused_window()
            .and_then(|h| workspace.index_of(&h));
        let index = match (focused, forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };
        let handle = workspace.windows()[index].handle;
        self.state.focus_window(&handle)
    }

    pub fn focus_next(&mut self) -> bool {
        self.focus_relative(true)
    }

    pub fn focus_previous(&mut self) -> bool {
        self.focus_relative(false)
    }

    /// Exchanges the focused window with the master of the workspace on screen.
    pub fn swap_master(&mut self) -> bool {
        let Some(focused) = self.display_server.focused_window() else {
            return false;
        };
        if !self.state.workspaces.current_mut().swap_with_master(&focused) {
            return false;
        }
        self.state.arrange();
        self.state.publish_client_list();
        self.state.restack();
        true
    }

    /// Asks the focused window to close.
    pub fn close_focused(&mut self) -> bool {
        let Some(focused) = self.display_server.focused_window() else {
            return false;
        };
        if !self.state.workspaces.is_current(&focused) {
            return false;
        }
        self.state
            .actions
            .push_back(DisplayAction::KillWindow(focused));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, Window};
    use crate::Manager;

    fn manager_with_windows(
        count: MockHandle,
    ) -> Manager<
        MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<MockHandle>,
    > {
        let mut manager = Manager::new_test_with_screen(2);
        for h in 1..=count {
            manager.window_created_handler(Window::new(WindowHandle(h), None));
        }
        manager.flush_actions();
        manager
    }

    #[test]
    fn focusing_a_window_should_make_it_active() {
        let mut manager = manager_with_windows(2);
        assert!(manager.state.focus_window(&WindowHandle(1)));
        let actions = manager.flush_actions();
        assert!(actions.contains(&DisplayAction::SetBorderColor(
            WindowHandle(2),
            BorderColor::Inactive
        )));
        assert!(actions.contains(&DisplayAction::SetBorderColor(
            WindowHandle(1),
            BorderColor::Active
        )));
        assert_eq!(manager.display_server.focused, Some(WindowHandle(1)));
    }

    #[test]
    fn focusing_an_unmanaged_window_does_nothing() {
        let mut manager = manager_with_windows(1);
        assert!(!manager.state.focus_window(&WindowHandle(7)));
        assert!(manager.flush_actions().is_empty());
    }

    #[test]
    fn focus_next_and_previous_wrap_around() {
        let mut manager = manager_with_windows(3);
        assert_eq!(manager.display_server.focused, Some(WindowHandle(3)));
        manager.focus_next();
        manager.flush_actions();
        assert_eq!(manager.display_server.focused, Some(WindowHandle(1)));
        manager.focus_previous();
        manager.flush_actions();
        assert_eq!(manager.display_server.focused, Some(WindowHandle(3)));
        manager.focus_previous();
        manager.flush_actions();
        assert_eq!(manager.display_server.focused, Some(WindowHandle(2)));
        manager.focus_next();
        manager.flush_actions();
        assert_eq!(manager.display_server.focused, Some(WindowHandle(3)));
    }

    #[test]
    fn focus_next_without_focus_starts_at_the_first_window() {
        let mut manager = manager_with_windows(2);
        manager.display_server.focused = None;
        manager.focus_next();
        manager.flush_actions();
        assert_eq!(manager.display_server.focused, Some(WindowHandle(1)));
    }

    #[test]
    fn focus_moves_do_nothing_on_an_empty_workspace() {
        let mut manager = manager_with_windows(0);
        assert!(!manager.focus_next());
        assert!(!manager.focus_previous());
    }

    #[test]
    fn swapping_the_focused_window_makes_it_master() {
        let mut manager = manager_with_windows(3);
        assert!(manager.swap_master());
        let current = manager.state.workspaces.current();
        assert_eq!(current.master(), Some(WindowHandle(3)));
        assert_eq!(
            current.handles(),
            vec![WindowHandle(3), WindowHandle(2), WindowHandle(1)]
        );
        let master = manager.state.workspaces.find_window(&WindowHandle(3));
        assert_eq!(master.map(|w| w.normal.x()), Some(10));
    }

    #[test]
    fn swapping_the_master_with_itself_does_nothing() {
        let mut manager = manager_with_windows(2);
        manager.state.focus_window(&WindowHandle(1));
        manager.flush_actions();
        assert!(!manager.swap_master());
        let single = &mut manager_with_windows(1);
        assert!(!single.swap_master());
    }

    #[test]
    fn closing_asks_the_focused_window_to_leave() {
        let mut manager = manager_with_windows(2);
        manager.close_focused();
        assert_eq!(
            manager.flush_actions(),
            vec![DisplayAction::KillWindow(WindowHandle(2))]
        );
    }
}
