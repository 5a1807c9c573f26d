//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`TINCT_STORAGE_DIR`, `TINCT_ENDPOINT`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./tinct.toml in the current directory
//! 4. $XDG_CONFIG_HOME/tinct/tinct.toml (or ~/.config/tinct/tinct.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = "tinct.toml";
const CONFIG_DIR_NAME: &str = "tinct";
const STORAGE_DIR_ENV: &str = "TINCT_STORAGE_DIR";
const ENDPOINT_ENV: &str = "TINCT_ENDPOINT";
/// Storage directory of last resort when no platform data dir exists.
const FALLBACK_STORAGE_DIR: &str = ".tinct";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TinctConfig {
    /// Directory backing the durable key-value store.
    pub storage_dir: PathBuf,
    /// Remote color endpoint for fetch/push. `None` disables API sync.
    pub endpoint: Option<String>,
}

impl Default for TinctConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            endpoint: None,
        }
    }
}

/// On-disk TOML shape. Everything is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    storage: StorageSection,
    api: ApiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct StorageSection {
    dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    endpoint: Option<String>,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<TinctConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_file,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<TinctConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let parsed = read_file_config(path_override, &read_file, &config_root)?;

    let mut config = TinctConfig::default();
    if let Some(dir) = parsed.storage.dir {
        config.storage_dir = dir;
    }
    if let Some(endpoint) = parsed.api.endpoint {
        config.endpoint = Some(endpoint);
    }

    // Environment overrides win over every file source.
    if let Some(dir) = env_lookup(STORAGE_DIR_ENV) {
        config.storage_dir = PathBuf::from(dir);
    }
    if let Some(endpoint) = env_lookup(ENDPOINT_ENV) {
        config.endpoint = Some(endpoint);
    }

    if let Some(endpoint) = &config.endpoint {
        if endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "api endpoint cannot be empty".to_string(),
            ));
        }
    }
    Ok(config)
}

/// Read and parse the first config file found in precedence order.
///
/// An explicit --config path must exist; the implicit locations are
/// optional and fall through to defaults.
fn read_file_config<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<FileConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = path_override {
        let text = read_file(Path::new(path))?;
        return Ok(toml::from_str(&text)?);
    }
    for candidate in implicit_config_paths(config_root) {
        match read_file(&candidate) {
            Ok(text) => return Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(FileConfig::default())
}

fn implicit_config_paths<FRoot>(config_root: &FRoot) -> Vec<PathBuf>
where
    FRoot: Fn() -> Option<PathBuf>,
{
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(root) = config_root() {
        paths.push(root);
    }
    paths
}

/// Platform config file location (`~/.config/tinct/tinct.toml`).
fn config_root_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(LOCAL_CONFIG_FILE))
}

/// Platform data directory (`~/.local/share/tinct` on Linux).
fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STORAGE_DIR))
}
