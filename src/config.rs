use crate::error::ConfigError;
use crate::matcher::MatchingMode;
use crate::tone::DEFAULT_TONE_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_REPROMPT: &str = "Sorry, that is not a valid option.";

/// Engine and session settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Overrides the root named in the menu definition.
    pub root: Option<String>,
    pub matching_mode: MatchingMode,
    pub tone_duration_ms: u32,
    /// Spoken before the current prompt is repeated after an invalid input.
    pub reprompt: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            root: None,
            matching_mode: MatchingMode::default(),
            tone_duration_ms: DEFAULT_TONE_DURATION_MS,
            reprompt: DEFAULT_REPROMPT.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}
