//! Everything the manager knows about the screen, its workspaces and docks.

use crate::config::{Config, Keybind};
use crate::display_action::DisplayAction;
use crate::layouts::{self, LayoutParams};
use crate::models::{
    DockArea, Handle, Mode, Screen, Window, WindowHandle, WorkspaceManager, Xyhw,
};
use crate::utils::modmask_lookup::{Button, ModMask};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Debug)]
pub struct State<H: Handle> {
    #[serde(bound = "")]
    pub screen: Screen<H>,
    #[serde(bound = "")]
    pub workspaces: WorkspaceManager<H>,
    /// Dock windows, in the order they appeared.
    #[serde(bound = "")]
    pub docks: Vec<Window<H>>,
    pub dock_area: DockArea,
    #[serde(bound = "")]
    pub mode: Mode<H>,
    pub layout: LayoutParams,
    pub border_width: i32,
    pub keybinds: Vec<Keybind>,
    pub mousekey: ModMask,
    pub move_button: Button,
    pub resize_button: Button,
    pub default_width: i32,
    pub default_height: i32,
    #[serde(bound = "")]
    pub actions: VecDeque<DisplayAction<H>>,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            screen: Screen::default(),
            workspaces: WorkspaceManager::new(
                config.workspace_names(),
                config.max_windows_per_workspace(),
            ),
            docks: vec![],
            dock_area: DockArea::default(),
            mode: Mode::default(),
            layout: config.layout_params(),
            border_width: config.border_width(),
            keybinds: config.keybinds(),
            mousekey: config.mousekey(),
            move_button: config.move_button(),
            resize_button: config.resize_button(),
            default_width: config.default_width(),
            default_height: config.default_height(),
            actions: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn screen_xyhw(&self) -> Xyhw {
        self.screen.bbox.into()
    }

    /// Whether the handle is a dock or a member of any workspace.
    #[must_use]
    pub fn is_managed(&self, handle: &WindowHandle<H>) -> bool {
        self.is_dock(handle) || self.workspaces.is_managed(handle)
    }

    #[must_use]
    pub fn is_dock(&self, handle: &WindowHandle<H>) -> bool {
        self.docks.iter().any(|d| &d.handle == handle)
    }

    /// Recomputes the reserved strip from the most recent dock, or clears it.
    pub fn update_dock_area(&mut self) {
        let screen_height = self.screen.bbox.height;
        self.dock_area = self.docks.last().map_or_else(DockArea::default, |dock| {
            DockArea::from_window_geometry(&dock.normal, screen_height)
        });
        tracing::debug!("Dock area is now {:?}", self.dock_area);
    }

    /// Tiles the workspace on screen and queues updates for the windows that moved.
    pub fn arrange(&mut self) {
        let area = layouts::tiling_area(&self.screen_xyhw(), &self.dock_area, self.layout.outer_gap);
        let layout = self.layout;
        let workspace = self.workspaces.current_mut();
        let changed = workspace.arrange(&area, &layout);
        for handle in changed {
            if let Some(window) = workspace.find(&handle) {
                self.actions
                    .push_back(DisplayAction::UpdateWindow(window.clone()));
            }
        }
    }

    /// Queues the stacking order of the workspace on screen.
    pub fn restack(&mut self) {
        let mut order = self.workspaces.current().raise_order();
        order.reverse();
        self.actions.push_back(DisplayAction::SetWindowOrder(order));
    }

    pub fn publish_client_list(&mut self) {
        let handles = self.workspaces.current().handles();
        self.actions.push_back(DisplayAction::SetClientList(handles));
    }
}

#[cfg(test)]
mod tests {
    use super::State;
    use crate::models::{BBox, MockHandle, Screen, Window, WindowHandle, Xyhw};
    use crate::{DisplayAction, Manager};

    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}

    #[test]
    fn the_whole_state_can_be_serialized() {
        assert_serde::<State<MockHandle>>();
    }

    #[test]
    fn the_dock_area_follows_the_latest_dock_and_clears_without_one() {
        let mut manager = Manager::new_test(1);
        let state = &mut manager.state;
        state.screen = Screen::new(
            WindowHandle(0),
            BBox {
                x: 0,
                y: 0,
                width: 1000,
                height: 800,
            },
        );
        let mut dock = Window::new(WindowHandle::<MockHandle>(1), None);
        dock.normal = Xyhw::new(0, 0, 1000, 30);
        state.docks.push(dock);
        state.update_dock_area();
        assert!(state.dock_area.is_top());
        state.docks.clear();
        state.update_dock_area();
        assert_eq!(state.dock_area.h, 0);
    }

    #[test]
    fn restacking_puts_the_topmost_window_first() {
        let mut manager = Manager::new_test(1);
        manager.window_created_handler(Window::new(WindowHandle(1), None));
        manager.window_created_handler(Window::new(WindowHandle(2), None));
        manager.state.actions.clear();
        manager.state.restack();
        assert_eq!(
            manager.state.actions.pop_back(),
            Some(DisplayAction::SetWindowOrder(vec![
                WindowHandle(2),
                WindowHandle(1)
            ]))
        );
    }
}
