//! Logging subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{Log, LogFormat};

/// Install the global tracing subscriber from config.
///
/// The returned guard flushes the non-blocking writer on drop; hold it for
/// the lifetime of the process.
pub fn setup(
    config: &Log,
    service_name: &str,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    if config.console.enabled {
        let level = config.console.level.into_level();

        let filter = match &config.console.filtering_directive {
            Some(directive) => EnvFilter::new(directive),
            None => {
                let mut directives = vec![format!("{service_name}={level}")];
                directives.extend(
                    crates_to_filter
                        .as_ref()
                        .iter()
                        .map(|crate_name| format!("{crate_name}={level}")),
                );
                EnvFilter::new(directives.join(","))
            }
        };

        match config.console.log_format {
            LogFormat::Default => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().with_writer(writer))
                    .init();
            }
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(writer))
                    .init();
            }
        }
    }

    guard
}
