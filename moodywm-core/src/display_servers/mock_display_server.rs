use super::Config;
use super::DisplayAction;
use super::DisplayEvent;
use super::DisplayServer;
use crate::errors::Result;
use crate::models::{Handle, WindowHandle};

/// Records every executed action and follows focus the way a real server would.
#[derive(Clone, Debug, Default)]
pub struct MockDisplayServer<H: Handle> {
    pub executed: Vec<DisplayAction<H>>,
    pub focused: Option<WindowHandle<H>>,
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Result<Self> {
        Ok(Self {
            executed: vec![],
            focused: None,
        })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        vec![]
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        match &act {
            DisplayAction::WindowTakeFocus(window) => self.focused = Some(window.handle),
            DisplayAction::Unfocus => self.focused = None,
            DisplayAction::UnmapWindow(handle) if self.focused == Some(*handle) => {
                self.focused = None;
            }
            _ => {}
        }
        self.executed.push(act);
        None
    }

    fn focused_window(&self) -> Option<WindowHandle<H>> {
        self.focused
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        Box::pin(std::future::pending())
    }

    fn flush(&self) {}
}
