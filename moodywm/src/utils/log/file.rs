use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

const LOG_FILE_NAME: &str = "moodywm.log";

/// `~/.cache/moodywm`
fn log_dir() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("moodywm")
        .ok()?
        .create_cache_directory("")
        .ok()
}

/// Adds a layer appending to `~/.cache/moodywm/moodywm.log`. Writes are blocking so nothing
/// is lost when the process exits.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = log_dir().map(|dir| {
        let writer = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });
    if layer.is_none() {
        eprintln!("Couldn't create the log directory, file logging is disabled");
    }
    subscriber.with(layer)
}
