use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Item seeded into the session at startup
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub(crate) struct ConfigItem {
    pub(crate) name: String,
    pub(crate) date: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) yes: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) items: Vec<ConfigItem>,
}

impl Config {
    /// Load the first parseable config from the default search paths
    pub(crate) fn load(debug: bool) -> Self {
        for path in Self::get_config_paths() {
            if let Some(config) = Self::try_load(&path, debug) {
                return config;
            }
        }
        Self::default()
    }

    /// Load an explicitly requested config file. Unlike the search path, a
    /// missing file is an error here.
    pub(crate) fn load_from(path: &Path, debug: bool) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Config {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&content, path, debug).unwrap_or_default())
    }

    fn try_load(path: &Path, debug: bool) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        Self::parse(&content, path, debug)
    }

    /// `debug` is the CLI flag; a config that sets `debug = true` logs too
    fn parse(content: &str, path: &Path, debug: bool) -> Option<Self> {
        match toml::from_str::<Config>(content) {
            Ok(config) => {
                if debug || config.debug {
                    eprintln!("[DEBUG] Loaded config from {}", path.display());
                }
                Some(config)
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/exptrack/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("exptrack").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("exptrack").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.exptrack.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".exptrack.toml"));
        }

        paths
    }
}
