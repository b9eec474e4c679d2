use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::Handle;
use crate::state::State;
use crate::utils::child_process::Children;
use crate::DisplayEvent;
use std::sync::{atomic::AtomicBool, Arc};

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,

    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Connects to the display server and builds the initial state from `config`.
    ///
    /// # Errors
    ///
    /// Fails when the display server cannot start.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;

        Ok(Self {
            state: State::new(&config),
            config,
            children: Children::default(),
            reap_requested: Arc::default(),
            display_server,
        })
    }

    pub fn register_child_hook(&self) {
        crate::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Handles one event to completion: its actions reach the display server before the next
    /// event is looked at. Returns the events those actions produced.
    pub(crate) fn handle_event(&mut self, event: DisplayEvent<H>) -> Vec<DisplayEvent<H>> {
        self.display_event_handler(event);
        self.execute_actions()
    }

    /// Hands every queued action to the display server. Returns the events they produced.
    pub(crate) fn execute_actions(&mut self) -> Vec<DisplayEvent<H>> {
        let mut events = vec![];
        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("Executing {:?}", act);
            if let Some(event) = self.display_server.execute_action(act) {
                events.push(event);
            }
        }
        events
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test(workspaces: usize) -> Self {
        Self::new(crate::config::TestConfig::new(workspaces))
            .expect("the mock display server always starts")
    }

    /// A manager with a 1000x800 screen already announced.
    pub fn new_test_with_screen(workspaces: usize) -> Self {
        let mut manager = Self::new_test(workspaces);
        manager.screen_create_handler(crate::models::Screen::new(
            crate::models::WindowHandle(0),
            crate::models::BBox {
                x: 0,
                y: 0,
                width: 1000,
                height: 800,
            },
        ));
        manager
    }

    /// Runs the queued actions through the mock server and returns what it executed.
    pub fn flush_actions(&mut self) -> Vec<crate::DisplayAction<crate::models::MockHandle>> {
        self.execute_actions();
        std::mem::take(&mut self.display_server.executed)
    }
}
