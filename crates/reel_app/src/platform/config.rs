//! Startup configuration.
//!
//! The API bearer token is read from `TMDB_API_KEY`. Everything else comes from
//! an optional `reel.ron` in the working directory and falls back to defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reel_engine::{FetchSettings, DEFAULT_BASE_URL};
use reel_logging::LogDestination;
use serde::Deserialize;

pub const API_KEY_ENV: &str = "TMDB_API_KEY";
pub const CONFIG_FILENAME: &str = "reel.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable TMDB_API_KEY is not set")]
    MissingApiKey,
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct FileConfig {
    base_url: String,
    request_timeout_secs: Option<u64>,
    log_destination: LogTarget,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            log_destination: LogTarget::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fetch: FetchSettings,
    pub log_destination: LogDestination,
}

pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load(&dir, std::env::var(API_KEY_ENV).ok())
}

pub(crate) fn load(dir: &Path, api_key: Option<String>) -> Result<AppConfig, ConfigError> {
    let api_key = api_key
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    let file = read_file_config(&dir.join(CONFIG_FILENAME))?;
    let fetch = FetchSettings {
        base_url: file.base_url,
        request_timeout: file.request_timeout_secs.map(Duration::from_secs),
        ..FetchSettings::with_token(api_key)
    };

    Ok(AppConfig {
        fetch,
        log_destination: file.log_destination.into(),
    })
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
