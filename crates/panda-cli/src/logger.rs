//! Logging initialisation via tracing-subscriber.

use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Level used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialise the global tracing subscriber, writing to stderr.
pub fn init(level: Option<&str>) -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level)?)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| CliError::Logger(format!("failed to set subscriber: {e}")))
}

/// An explicit `level` takes precedence and `RUST_LOG` is only used when it is
/// invalid. Without one, `RUST_LOG` wins over [`DEFAULT_LEVEL`].
fn filter(level: Option<&str>) -> Result<EnvFilter, CliError> {
    match level {
        Some(level) => match EnvFilter::try_new(level) {
            Ok(filter) => Ok(filter),
            Err(level_err) => EnvFilter::try_from_default_env().map_err(|env_err| {
                CliError::Logger(format!(
                    "invalid log level '{level}': {level_err}; RUST_LOG parse failed: {env_err}"
                ))
            }),
        },
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
            .map_err(|e| CliError::Logger(format!("invalid default log level: {e}"))),
    }
}
