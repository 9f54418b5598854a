use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Executable used for every remote call
    pub gh_binary: String,
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            gh_binary: "gh".to_string(),
            log_file: None,
        }
    }
}

/// Colours as written in the config file; parsed by the renderer's theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub title: String,
    pub header_fg: String,
    pub header_bg: String,
    pub unread: String,
    pub read: String,
    pub dim: String,
    pub status: String,
    pub error: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            title: "#04B575".to_string(),
            header_fg: "#FAFAFA".to_string(),
            header_bg: "#7D56F4".to_string(),
            unread: "#FF5F87".to_string(),
            read: "#50FA7B".to_string(),
            dim: "#6272A4".to_string(),
            status: "#8BE9FD".to_string(),
            error: "red".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("gh-triage").join("config.toml"))
}

impl Config {
    /// Load from `path`, or the default location when `None`. Missing or
    /// unreadable files give the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        Self::parse(&content).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring invalid config {}: {}", path.display(), e);
            Config::default()
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
