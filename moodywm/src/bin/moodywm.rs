use moodywm_core::Manager;
use std::process::exit;
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

fn main() {
    moodywm::utils::log::setup_logging();
    tracing::info!("moodywm booting...");

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("moodywm: couldn't init Tokio runtime: {err}");
            exit(1);
        }
    };
    // The display server spawns its blocking poller while it is created.
    let _rt_guard = rt.enter();

    let config = moodywm::load();
    let manager = match Manager::<XlibWindowHandle, moodywm::Config, XlibDisplayServer>::new(config)
    {
        Ok(manager) => manager,
        Err(err) => {
            tracing::error!("Unable to start: {}", err);
            eprintln!("moodywm: {err}");
            exit(1);
        }
    };

    manager.register_child_hook();
    rt.block_on(manager.start_event_loop());
    tracing::info!("Completed");
}
