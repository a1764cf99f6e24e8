//! Configuration management.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use sdpi_theme_types::ThemeOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".sdpi-theme.toml";

/// Configuration structure that matches the TOML file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeOptions,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    /// If not set, uses RUST_LOG environment variable or defaults to "info"
    log_level: Option<String>,
}

/// Tool configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Element id and shading amounts
    pub theme: ThemeOptions,
    /// Log level (if set, used when RUST_LOG is not)
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with full priority chain:
    /// CLI args > env vars > explicit config file > local config > user config > defaults.
    ///
    /// Config files are searched in this order:
    /// 1. `config.toml` in user config directory (~/.config/sdpi-theme/ on Linux)
    /// 2. `.sdpi-theme.toml` in current directory
    /// 3. the file given with `--config`
    pub fn from_figment(
        config_path: Option<PathBuf>,
        element_id: Option<String>,
    ) -> anyhow::Result<Self> {
        let local_config = std::env::current_dir()
            .ok()
            .map(|d| d.join(LOCAL_CONFIG_FILE));
        let user_config = directories::ProjectDirs::from("", "", "sdpi-theme")
            .map(|dirs| dirs.config_dir().join("config.toml"));

        // 1. Start with defaults
        let mut figment = Figment::new().merge(Serialized::defaults(ConfigFile::default()));

        // 2. Merge user config file if it exists
        if let Some(ref path) = user_config {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // 3. Merge local config file if it exists
        if let Some(ref path) = local_config {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // 4. Merge an explicitly requested file; it must exist
        if let Some(ref path) = config_path {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }

        // 5. Merge environment variables (SDPI_THEME_* prefix, `__` separates sections)
        figment = figment.merge(
            Env::prefixed("SDPI_THEME_").map(|key| key.as_str().replace("__", ".").into()),
        );

        // 6. Merge CLI arguments (highest priority)
        if let Some(ref id) = element_id {
            figment = figment.merge(Serialized::default("theme.element_id", id));
        }

        let config_file: ConfigFile = figment.extract()?;

        Ok(Self {
            theme: config_file.theme,
            log_level: config_file.logging.log_level,
        })
    }
}
