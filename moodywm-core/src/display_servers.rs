#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::Handle;
use crate::models::WindowHandle;
use crate::DisplayEvent;

use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

pub trait DisplayServer<H: Handle> {
    /// Connects to the display and takes over window management.
    ///
    /// # Errors
    ///
    /// Fails when the display cannot be opened.
    fn new(config: &impl Config) -> Result<Self>
    where
        Self: Sized;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    fn execute_action(&mut self, _act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        None
    }

    /// The window holding input focus, if it is not the root.
    fn focused_window(&self) -> Option<WindowHandle<H>>;

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);
}
