//! Logger setup. Log lines go to stderr so stdout stays clean for tables
//! and JSON.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

const DEFAULT_SPEC: &str = "warn";

/// Start the global logger.
///
/// An explicit `spec` wins; otherwise `RUST_LOG` is consulted and the
/// default is `warn`. The returned handle must be kept alive and flushed
/// before exit.
pub fn init(spec: Option<&str>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = match spec {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str(DEFAULT_SPEC)?,
    };
    logger.log_to_stderr().start()
}
