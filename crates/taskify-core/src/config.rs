//! Application configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded in layers:
//! 1. Explicit path (e.g. `--config`), if given and present
//! 2. Override in data dir (~/.local/share/taskify/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Environment variables are applied last:
//! `TASKIFY_DATA`, `TASKIFY_HOST`, `TASKIFY_PORT`, `TASKIFY_ALLOWED_ORIGINS`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/taskify.toml");

/// Fallback snapshot file name when no data dir is available
const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Task snapshot file
    pub data_file: PathBuf,
    pub server: ServerSettings,
    /// File the config was read from (None = embedded defaults)
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Web server settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Directory of static UI files served at `/`
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec![],
            static_dir: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            server: ServerSettings::default(),
            source: None,
        }
    }
}

impl Config {
    /// Load config from files, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = load_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Config::default();

        if let Some(data_file) = raw.data_file {
            config.data_file = data_file;
        }

        if let Some(server) = raw.server {
            if let Some(host) = server.host {
                config.server.host = host;
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
            if let Some(origins) = server.allowed_origins {
                config.server.allowed_origins = origins;
            }
            config.server.static_dir = server.static_dir;
        }

        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(data) = get("TASKIFY_DATA") {
            self.data_file = PathBuf::from(data);
        }
        if let Some(host) = get("TASKIFY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("TASKIFY_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("Invalid TASKIFY_PORT: {}", port)))?;
        }
        if let Some(origins) = get("TASKIFY_ALLOWED_ORIGINS") {
            self.server.allowed_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("taskify").join("config.toml"))
}

/// Default task snapshot location
pub fn default_data_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("taskify").join(DEFAULT_DATA_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Load configuration (explicit path, then data-dir override, then default)
fn load_file(explicit: Option<&Path>) -> Result<Config> {
    let candidate = explicit
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .filter(|p| p.exists());

    match candidate {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config {}: {}", path.display(), e))
            })?;
            let mut config = Config::parse(&content)?;
            tracing::debug!(path = %path.display(), "Loaded config file");
            config.source = Some(path);
            Ok(config)
        }
        None => Config::parse(DEFAULT_CONFIG),
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    data_file: Option<PathBuf>,
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
    static_dir: Option<PathBuf>,
}
