use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Maximum level that is printed, e.g. `info` or `debug`.
    pub level: String,
    pub threads: bool,
    pub color: bool,
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            threads: true,
            color: true,
            timestamp: true,
        }
    }
}

impl LoggingConfig {
    pub(crate) fn level_is_known(&self) -> bool {
        matches!(
            self.level.to_ascii_lowercase().as_str(),
            "off" | "error" | "warn" | "info" | "debug" | "trace"
        )
    }
}
