use crate::child_process::Nanny;
use crate::config::Config;
use crate::models::Handle;
use crate::{DisplayServer, Manager};
use std::collections::VecDeque;
use std::sync::atomic::Ordering;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Runs the manager until the process is killed.
    pub async fn start_event_loop(mut self) {
        self.run_autostart();

        //main event loop
        let mut event_buffer = vec![];
        loop {
            self.display_server.flush();

            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    let mut pending: VecDeque<_> = event_buffer.drain(..).collect();
                    while let Some(event) = pending.pop_front() {
                        pending.extend(self.handle_event(event));
                    }
                }
            }

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.remove_finished_children();
            }
        }
    }

    fn run_autostart(&mut self) {
        match Nanny::run_autostart(self.config.autostart().as_deref()) {
            Ok(Some(child)) => {
                self.children.insert(child);
            }
            Ok(None) => tracing::debug!("No autostart configured"),
            Err(err) => tracing::error!("Autostart failed: {}", err),
        }
    }
}
