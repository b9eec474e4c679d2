use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald-log")]
mod journald;

#[cfg(feature = "file-log")]
pub mod file;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "MOODYWM_LOG";

/// Installs the global subscriber. The filter comes from `MOODYWM_LOG`, `info` when unset.
pub fn setup_logging() {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_owned());
    let (subscriber, parse_err) = parse_log_level(&level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid {} value {:?}, using info: {}", LOG_ENV, level, err);
    }
}

#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy("")
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald-log")]
    let subscriber = journald::add_layer(subscriber);

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_filters_parse() {
        let (_, err) = parse_log_level("moodywm_core=debug,info");
        assert!(err.is_none());
    }

    #[test]
    fn invalid_filters_are_reported() {
        let (_, err) = parse_log_level("moodywm_core=loud");
        assert!(err.is_some());
    }
}
