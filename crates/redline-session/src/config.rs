use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Tunables for one editing session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// How long merge-updated fields stay emphasized, in milliseconds.
    pub highlight_window_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            highlight_window_ms: 2500,
        }
    }
}

impl SessionConfig {
    /// Parse from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SessionError> {
        toml::from_str(text).map_err(|e| SessionError::Config(e.to_string()))
    }

    /// The highlight window as a [`Duration`].
    pub fn highlight_window(&self) -> Duration {
        Duration::from_millis(self.highlight_window_ms)
    }
}
