use super::{Config, Handle, Manager, Screen};
use crate::display_servers::DisplayServer;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Records the screen windows are arranged on.
    ///
    /// Returns `true` if changes need to be rendered.
    pub fn screen_create_handler(&mut self, screen: Screen<H>) -> bool {
        tracing::debug!("Screen created: {:?}", screen.bbox);
        self.state.screen = screen;
        self.state.update_dock_area();
        self.state.arrange();
        true
    }
}
