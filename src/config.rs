use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::CONFIG_ENV;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) input: Option<PathBuf>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) date_column: Option<String>,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) debug: bool,
    /// File this config was read from, if any
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    /// Load the first readable config file. Falls back to defaults.
    pub(crate) fn load() -> Self {
        Self::load_from(Self::get_config_paths())
    }

    fn load_from(paths: Vec<PathBuf>) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };
            match Self::parse(&content) {
                Ok(mut config) => {
                    config.source = Some(path);
                    return config;
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return vec![PathBuf::from(path)];
        }

        let mut paths = Vec::new();

        // ~/.config/matchsort/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("matchsort").join("config.toml"));
        }

        // Platform config dir (Application Support on macOS, AppData on Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("matchsort").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".matchsort.toml"));
        }

        paths
    }
}
