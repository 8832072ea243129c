use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "MARKDOWN2HTML_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit `</ul>` for an unordered list still open at end of input.
    pub close_unordered_at_eof: bool,
    /// Emit `</p>` before a heading that interrupts a paragraph.
    pub close_paragraph_before_heading: bool,
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            close_unordered_at_eof: false,
            close_paragraph_before_heading: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Location of the config file, honouring [`CONFIG_ENV_VAR`].
    pub fn config_path() -> PathBuf {
        let from_env = std::env::var(CONFIG_ENV_VAR).ok();
        Self::config_path_from(from_env.as_deref())
    }

    fn config_path_from(from_env: Option<&str>) -> PathBuf {
        match from_env.filter(|p| !p.is_empty()) {
            Some(path) => {
                let path = PathBuf::from(path);
                Self::expand_path(&path).unwrap_or(path)
            }
            None => {
                let config_dir = shellexpand::tilde("~/.config/markdown2html");
                PathBuf::from(config_dir.as_ref()).join("config.toml")
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
