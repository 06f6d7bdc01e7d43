// Logger configuration
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit one JSON object per event instead of human readable lines
    pub json: bool,
    pub redaction_enabled: bool,
    /// Write to stderr, keeping stdout free for protocol traffic
    pub stderr: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            redaction_enabled: true,
            stderr: false,
        }
    }
}
