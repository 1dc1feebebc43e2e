use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "semver-compat.toml";

/// Represents the complete configuration for semver-compat.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_true() -> bool {
    true
}

/// Which grammars are accepted when parsing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParserConfig {
    /// Accept legacy shorthand such as `1.0.1b2` when the strict grammar fails
    #[serde(default = "default_true")]
    pub compatibility: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            compatibility: true,
        }
    }
}

/// Terminal output settings for the command-line tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub color: bool,

    /// Print the canonical form instead of the string as it was given
    #[serde(default)]
    pub canonical: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: true,
            canonical: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-compat.toml` in current directory
/// 3. `.semver-compat.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        log::debug!("Reading config from {}", path);
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        log::debug!("Reading config from ./{}", CONFIG_FILE_NAME);
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            log::debug!("Reading config from {}", config_path.display());
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}
