use std::ffi::OsString;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const STAGE_VAR: &str = "STAGE";

pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_STAGE: &str = "development";

/// Deployment settings echoed back in every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
    pub stage: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            stage: DEFAULT_STAGE.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds settings from any `std::env::var_os`-shaped lookup.
    /// Unset keys fall back to their defaults; values that are not valid
    /// unicode are decoded lossily.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self {
            log_level: read_or(&lookup, LOG_LEVEL_VAR, DEFAULT_LOG_LEVEL),
            stage: read_or(&lookup, STAGE_VAR, DEFAULT_STAGE),
        }
    }
}

fn read_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<OsString>,
{
    lookup(key)
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_else(|| default.to_string())
}
