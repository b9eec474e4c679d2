use super::{Config, Handle, Manager, Window, WindowHandle, WindowKind};
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{StateAction, WindowState, XyhwChange};
use std::cmp;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Admits a window asking to be mapped.
    /// Returns true if changes need to be rendered.
    pub fn window_created_handler(&mut self, mut window: Window<H>) -> bool {
        //don't add the window if the manager already knows about it
        if self.state.is_managed(&window.handle) {
            return false;
        }

        let kind = window.classify();
        tracing::debug!("New {:?} window {:?} ({:?})", kind, window.handle, window.name);
        if kind == WindowKind::Dock {
            window.border = 0;
            if let Some(requested) = window.requested {
                window.normal = requested;
            }
            let act = DisplayAction::AddedWindow(window.handle, kind);
            self.state.actions.push_back(act);
            self.state.docks.push(window);
            self.state.update_dock_area();
            self.state.arrange();
            return true;
        }

        window.border = self.state.border_width;
        if kind == WindowKind::Floating {
            let screen = self.state.screen_xyhw();
            window.center_on(&screen, self.state.default_width, self.state.default_height);
        }
        let handle = window.handle;
        let workspace = match self.state.workspaces.add(window, None) {
            Ok(workspace) => workspace,
            Err(err) => {
                tracing::warn!("Leaving window {:?} unmanaged: {}", handle, err);
                return false;
            }
        };

        //let the DS know we are managing this window
        self.state
            .actions
            .push_back(DisplayAction::AddedWindow(handle, kind));
        if kind == WindowKind::Floating {
            if let Some(window) = self.state.workspaces.find_window(&handle) {
                let act = DisplayAction::UpdateWindow(window.clone());
                self.state.actions.push_back(act);
            }
        } else {
            self.state.arrange();
        }

        self.state
            .actions
            .push_back(DisplayAction::SetWindowDesktop(handle, workspace));
        self.state.publish_client_list();
        self.state.focus_window(&handle);
        true
    }

    /// Forgets a window that was unmapped or destroyed.
    /// Returns true if changes need to be rendered.
    pub fn window_destroyed_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        if let Some(index) = self.state.docks.iter().position(|d| &d.handle == handle) {
            self.state.docks.remove(index);
            self.state.update_dock_area();
            self.state.arrange();
            return true;
        }

        let Some(workspace) = self.state.workspaces.workspace_of(handle) else {
            return false;
        };
        let index = self
            .state
            .workspaces
            .get(workspace)
            .and_then(|ws| ws.index_of(handle))
            .unwrap_or_default();
        self.state.workspaces.remove(handle);
        tracing::debug!("Window {:?} left workspace {}", handle, workspace);
        if self.state.mode.drag().is_some_and(|d| &d.handle == handle) {
            self.state.mode = crate::models::Mode::Normal;
            self.state.actions.push_back(DisplayAction::NormalMode);
        }
        if workspace != self.state.workspaces.current_index() {
            return false;
        }

        self.state.arrange();
        self.state.publish_client_list();
        // Focus whatever took the destroyed window's slot, or the new last window.
        let current = self.state.workspaces.current();
        let next = current
            .windows()
            .get(index)
            .or_else(|| current.windows().last())
            .map(|w| w.handle);
        match next {
            Some(next) => {
                self.state.focus_window(&next);
            }
            None => self.state.actions.push_back(DisplayAction::Unfocus),
        }
        true
    }

    /// Handles a client asking for new geometry.
    /// Returns true if changes need to be rendered.
    pub fn configure_request_handler(
        &mut self,
        handle: &WindowHandle<H>,
        change: XyhwChange,
    ) -> bool {
        if let Some(dock) = self.state.docks.iter_mut().find(|d| &d.handle == handle) {
            change.update(&mut dock.normal);
            let act = DisplayAction::UpdateWindow(dock.clone());
            self.state.actions.push_back(act);
            self.state.update_dock_area();
            self.state.arrange();
            return true;
        }

        let Some(window) = self.state.workspaces.find_window_mut(handle) else {
            return false;
        };
        if window.is_fullscreen() {
            let act = DisplayAction::ConfigureXlibWindow(window.clone());
            self.state.actions.push_back(act);
            return false;
        }

        let mut inner = window.calculated_xyhw();
        if window.is_floating() {
            if !change.update(&mut inner) {
                return false;
            }
        } else {
            // Tiled windows keep their slot and may only grow until the next arrangement.
            let w = change.w.map_or(inner.w(), |w| cmp::max(w, inner.w()));
            let h = change.h.map_or(inner.h(), |h| cmp::max(h, inner.h()));
            if w == inner.w() && h == inner.h() {
                let act = DisplayAction::ConfigureXlibWindow(window.clone());
                self.state.actions.push_back(act);
                return false;
            }
            inner.set_w(w);
            inner.set_h(h);
        }
        window.set_inner_xyhw(inner);
        let act = DisplayAction::UpdateWindow(window.clone());
        self.state.actions.push_back(act);
        true
    }

    /// Enters or leaves fullscreen for a managed window.
    /// Returns true if changes need to be rendered.
    pub fn fullscreen_request_handler(
        &mut self,
        handle: &WindowHandle<H>,
        action: StateAction,
    ) -> bool {
        let screen = self.state.screen_xyhw();
        let Some(window) = self.state.workspaces.find_window_mut(handle) else {
            return false;
        };
        let fullscreen = action.resolve(window.is_fullscreen());
        if fullscreen == window.is_fullscreen() {
            return false;
        }
        window.set_fullscreen(fullscreen.then_some(screen));
        let tiled = window.is_tiled();
        let act = DisplayAction::UpdateWindow(window.clone());
        self.state.actions.push_back(act);
        let act = DisplayAction::SetState(*handle, fullscreen, WindowState::Fullscreen);
        self.state.actions.push_back(act);
        if !fullscreen && tiled {
            self.state.arrange();
        }
        if self.state.workspaces.is_current(handle) {
            self.state.restack();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, WindowType, Xyhw};

    fn window(handle: MockHandle) -> Window<MockHandle> {
        Window::new(WindowHandle(handle), None)
    }

    fn dock(handle: MockHandle, geometry: Xyhw) -> Window<MockHandle> {
        let mut window = window(handle);
        window.r#type = WindowType::Dock;
        window.requested = Some(geometry);
        window
    }

    #[test]
    fn a_new_window_is_managed_tiled_and_focused() {
        let mut manager = Manager::new_test_with_screen(2);
        assert!(manager.window_created_handler(window(1)));
        let actions = manager.flush_actions();
        assert!(actions.contains(&DisplayAction::AddedWindow(
            WindowHandle(1),
            WindowKind::Tiled
        )));
        assert!(actions.contains(&DisplayAction::SetWindowDesktop(WindowHandle(1), 0)));
        assert!(actions.contains(&DisplayAction::SetClientList(vec![WindowHandle(1)])));
        assert_eq!(manager.display_server.focused, Some(WindowHandle(1)));
        let managed = manager.state.workspaces.find_window(&WindowHandle(1));
        assert_eq!(managed.map(|w| w.normal), Some(Xyhw::new(10, 10, 980, 780)));
    }

    #[test]
    fn a_window_is_only_admitted_once() {
        let mut manager = Manager::new_test_with_screen(1);
        manager.window_created_handler(window(1));
        assert!(!manager.window_created_handler(window(1)));
        assert_eq!(manager.state.workspaces.current().len(), 1);
    }

    #[test]
    fn a_full_workspace_leaves_new_windows_unmanaged() {
        let mut manager = Manager::new_test_with_screen(1);
        manager.state = crate::State::new(&crate::config::TestConfig {
            max_windows: 1,
            ..crate::config::TestConfig::new(1)
        });
        manager.window_created_handler(window(1));
        manager.flush_actions();
        assert!(!manager.window_created_handler(window(2)));
        assert!(manager.flush_actions().is_empty());
        assert!(!manager.state.is_managed(&WindowHandle(2)));
    }

    #[test]
    fn dialogs_float_centered_on_the_screen() {
        let mut manager = Manager::new_test_with_screen(1);
        let mut dialog = window(2);
        dialog.r#type = WindowType::Dialog;
        dialog.requested = Some(Xyhw::new(0, 0, 398, 198));
        manager.window_created_handler(window(1));
        manager.window_created_handler(dialog);
        let dialog = manager.state.workspaces.find_window(&WindowHandle(2));
        assert_eq!(dialog.map(|w| w.normal), Some(Xyhw::new(300, 300, 400, 200)));
        let tiled = manager.state.workspaces.find_window(&WindowHandle(1));
        assert_eq!(tiled.map(|w| w.normal), Some(Xyhw::new(10, 10, 980, 780)));
    }

    #[test]
    fn docks_reserve_space_and_are_never_tiled() {
        let mut manager = Manager::new_test_with_screen(1);
        manager.window_created_handler(window(1));
        manager.window_created_handler(dock(9, Xyhw::new(0, 0, 1000, 30)));
        assert!(manager.state.is_dock(&WindowHandle(9)));
        assert!(!manager.state.workspaces.is_managed(&WindowHandle(9)));
        let tiled = manager.state.workspaces.find_window(&WindowHandle(1));
        assert_eq!(tiled.map(|w| w.normal), Some(Xyhw::new(10, 40, 980, 750)));

        manager.window_destroyed_handler(&WindowHandle(9));
        let tiled = manager.state.workspaces.find_window(&WindowHandle(1));
        assert_eq!(tiled.map(|w| w.normal), Some(Xyhw::new(10, 10, 980, 780)));
    }

    #[test]
    fn a_bottom_dock_shrinks_the_area_from_below() {
        let mut manager = Manager::new_test_with_screen(1);
        manager.window_created_handler(window(1));
        manager.window_created_handler(dock(9, Xyhw::new(0, 770, 1000, 30)));
        let tiled = manager.state.workspaces.find_window(&WindowHandle(1));
        assert_eq!(tiled.map(|w| w.normal), Some(Xyhw::new(10, 10, 980, 750)));
    }

    #[test]
    fn destroying_the_master_of_three_focuses_the_new_master() {
        let mut manager = Manager::new_test_with_screen(1);
        for h in 1..=3 {
            manager.window_created_handler(window(h));
        }
        manager.flush_actions();
        assert!(manager.window_destroyed_handler(&WindowHandle(1)));
        manager.flush_actions();
        let current = manager.state.workspaces.current();
        assert_eq!(current.handles(), vec![WindowHandle(2), WindowHandle(3)]);
        assert_eq!(current.master(), Some(WindowHandle(2)));
        assert_eq!(manager.display_server.focused, Some(WindowHandle(2)));
        let master = manager.state.workspaces.find_window(&WindowHandle(2));
        assert_eq!(master.map(|w| w.normal.x()), Some(10));
    }

    #[test]
    fn destroying_a_stack_window_leaves_the_master_in_place() {
        let mut manager = Manager::new_test_with_screen(1);
        for h in 1..=3 {
            manager.window_created_handler(window(h));
        }
        manager.flush_actions();
        let master_before = manager
            .state
            .workspaces
            .find_window(&WindowHandle(1))
            .map(|w| w.normal);

        assert!(manager.window_destroyed_handler(&WindowHandle(2)));
        manager.flush_actions();
        let current = manager.state.workspaces.current();
        assert_eq!(current.master(), Some(WindowHandle(1)));
        assert_eq!(current.handles(), vec![WindowHandle(1), WindowHandle(3)]);
        let normal = |h| {
            manager
                .state
                .workspaces
                .find_window(&WindowHandle(h))
                .map(|w| w.normal)
        };
        assert_eq!(normal(1), master_before);
        assert_eq!(normal(1), Some(Xyhw::new(10, 10, 583, 780)));
        assert_eq!(normal(3), Some(Xyhw::new(603, 10, 387, 780)));
    }

    #[test]
    fn destroying_the_last_window_clears_focus() {
        let mut manager = Manager::new_test_with_screen(1);
        manager.window_created_handler(window(1));
        manager.flush_actions();
        manager.window_destroyed_handler(&WindowHandle(1));
        assert!(manager.flush_actions().contains(&DisplayAction::Unfocus));
        assert_eq!(manager.display_server.focused, None);
    }

    #[test]
    fn destroying_an_unknown_window_is_ignored() {
        let mut manager = Manager::new_test_with_screen(1);
        assert!(!manager.window_destroyed_handler(&WindowHandle(5)));
        assert!(manager.flush_actions().is_empty());
    }

    #[test]
    fn tiled_windows_may_grow_but_not_shrink_or_move() {
        let mut manager = Manager::new_test_with_screen(1);
        manager.window_created_handler(window(1));
        manager.window_created_handler(window(2));
        manager.flush_actions();
        let before = manager
            .state
            .workspaces
            .find_window(&WindowHandle(1))
            .map(Window::calculated_xyhw)
            .unwrap_or_default();

        let shrink = XyhwChange {
            x: Some(0),
            w: Some(10),
            ..XyhwChange::default()
        };
        assert!(!manager.configure_request_handler(&WindowHandle(1), shrink));
        let actions = manager.flush_actions();
        assert!(matches!(
            actions.as_slice(),
            [DisplayAction::ConfigureXlibWindow(_)]
        ));

        let grow = XyhwChange {
            x: Some(0),
            w: Some(before.w() + 50),
            ..XyhwChange::default()
        };
        assert!(manager.configure_request_handler(&WindowHandle(1), grow));
        let after = manager
            .state
            .workspaces
            .find_window(&WindowHandle(1))
            .map(Window::calculated_xyhw)
            .unwrap_or_default();
        assert_eq!(after.x(), before.x());
        assert_eq!(after.w(), before.w() + 50);
        assert_eq!(after.h(), before.h());

        manager.state.arrange();
        let rearranged = manager
            .state
            .workspaces
            .find_window(&WindowHandle(1))
            .map(Window::calculated_xyhw);
        assert_eq!(rearranged, Some(before));
    }

    #[test]
    fn floating_windows_take_the_requested_geometry() {
        let mut manager = Manager::new_test_with_screen(1);
        let mut dialog = window(1);
        dialog.r#type = WindowType::Dialog;
        manager.window_created_handler(dialog);
        let change = XyhwChange {
            x: Some(5),
            y: Some(6),
            w: Some(100),
            ..XyhwChange::default()
        };
        assert!(manager.configure_request_handler(&WindowHandle(1), change));
        let geometry = manager
            .state
            .workspaces
            .find_window(&WindowHandle(1))
            .map(Window::calculated_xyhw)
            .unwrap_or_default();
        assert_eq!((geometry.x(), geometry.y(), geometry.w()), (5, 6, 100));
    }

    #[test]
    fn fullscreen_covers_the_screen_and_restores_the_tile() {
        let mut manager = Manager::new_test_with_screen(1);
        manager.window_created_handler(window(1));
        manager.window_created_handler(window(2));
        manager.flush_actions();

        assert!(manager.fullscreen_request_handler(&WindowHandle(1), StateAction::Toggle));
        let actions = manager.flush_actions();
        assert!(actions.contains(&DisplayAction::SetState(
            WindowHandle(1),
            true,
            WindowState::Fullscreen
        )));
        assert!(actions.contains(&DisplayAction::SetWindowOrder(vec![
            WindowHandle(1),
            WindowHandle(2)
        ])));
        let window = manager.state.workspaces.find_window(&WindowHandle(1));
        assert_eq!(
            window.map(Window::calculated_xyhw),
            Some(Xyhw::new(0, 0, 1000, 800))
        );
        assert_eq!(window.map(Window::border), Some(0));
        assert!(!manager.fullscreen_request_handler(&WindowHandle(1), StateAction::Add));

        assert!(manager.fullscreen_request_handler(&WindowHandle(1), StateAction::Remove));
        let window = manager.state.workspaces.find_window(&WindowHandle(1));
        assert_eq!(window.map(Window::border), Some(1));
        assert_eq!(window.map(|w| w.normal.x()), Some(10));
    }
}
