//! Configuration handling for the showcase

use crate::users::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the users endpoint
pub const USERS_URL_ENV: &str = "SHOWCASE_USERS_URL";

const DEFAULT_TICK_RATE_MS: u64 = 100;
const DEFAULT_LOG_FILTER: &str = "state_showcase=info";

/// User configuration for the showcase
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShowcaseConfig {
    /// Endpoint the users panel reads from
    pub users_endpoint: Option<String>,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: Option<u64>,
    /// tracing filter used when RUST_LOG is unset
    pub log_filter: Option<String>,
}

impl ShowcaseConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "state-showcase", "state-showcase")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("state-showcase.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ShowcaseConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Endpoint to fetch users from, env var first
    pub fn users_endpoint(&self) -> String {
        self.resolve_endpoint(std::env::var(USERS_URL_ENV).ok())
    }

    fn resolve_endpoint(&self, env_value: Option<String>) -> String {
        env_value
            .or_else(|| self.users_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS).max(1))
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
