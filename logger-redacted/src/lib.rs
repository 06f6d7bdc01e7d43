//! Logging bootstrap with automatic PII redaction
//!
//! Claim documents carry patient names, member identifiers and free-text
//! notes. Anything that ends up in a log line must go through the redactor
//! first. This crate owns two things:
//!
//! - [`init_logging`]: installs the process-wide `tracing` subscriber
//!   (env-filter, optional JSON output) from a [`LoggerConfig`]
//! - [`PiiRedactor`]: regex based scrubbing of emails, phone numbers, SSNs,
//!   card numbers and IP addresses, plus literal values supplied by the
//!   caller (a patient display name, for instance)
//!
//! The [`redacted_info!`] and [`redacted_error!`] macros format a message,
//! run it through the global redactor, then emit it via `tracing`.
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{init_logging, LoggerConfig, redacted_error};
//!
//! init_logging(&LoggerConfig::default()).ok();
//!
//! let claim_id = "2500998765";
//! redacted_error!(claim_id = claim_id; "lookup failed, contact john.doe@example.com");
//! // message is logged as "lookup failed, contact EMAIL[...]"
//! ```

pub mod redactor;
pub mod config;
pub mod macros;

pub use redactor::*;
pub use config::*;

#[doc(hidden)]
pub use tracing;

use std::sync::OnceLock;

use error_common::PlatformError;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static GLOBAL_REDACTOR: OnceLock<PiiRedactor> = OnceLock::new();

/// Redactor used by the logging macros.
///
/// Falls back to the default (fully enabled) configuration when
/// [`init_logging`] has not run, so messages are never emitted unscrubbed.
pub fn global_redactor() -> &'static PiiRedactor {
    GLOBAL_REDACTOR.get_or_init(PiiRedactor::default)
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Only the first call in a
/// process configures the redactor; later calls report the subscriber as
/// already installed.
pub fn init_logging(config: &LoggerConfig) -> error_common::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| PlatformError::ConfigError(format!("invalid log level '{}': {}", config.level, e)))?;

    let redaction = if config.redaction_enabled {
        RedactionConfig::default()
    } else {
        RedactionConfig::disabled()
    };
    // Ignored when already set: the first configuration wins
    let _ = GLOBAL_REDACTOR.set(PiiRedactor::new(redaction));

    let writer = if config.stderr {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json().with_writer(writer)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true).with_writer(writer)).try_init()
    };

    installed.map_err(|e| PlatformError::ConfigError(format!("failed to install log subscriber: {}", e)))
}
