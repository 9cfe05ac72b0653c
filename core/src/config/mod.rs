use crate::runner::git::DEFAULT_COMMIT_MESSAGE;
use crate::runner::npm::DEFAULT_PACKAGE_MANAGER;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const WEBSEED_DIR: &str = ".webseed";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub package_manager: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub commit_message: String,
    pub install: bool,
    pub git: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            dependencies: ["choo", "choo-devtools", "sheetify", "ress", "gr8"]
                .map(String::from)
                .to_vec(),
            dev_dependencies: ["bankai", "dependency-check", "standard"]
                .map(String::from)
                .to_vec(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            install: true,
            git: true,
        }
    }
}

pub fn get_webseed_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(WEBSEED_DIR)
}

pub fn get_config_path() -> PathBuf {
    get_webseed_dir().join("config.toml")
}

impl Config {
    pub fn load_or_init() -> Result<Self> {
        if config_exists() {
            load_config()
        } else {
            Ok(Config::default())
        }
    }
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", config_path.display()))
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(config, &get_config_path())
}

pub fn save_config_to(config: &Config, config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content =
        toml::to_string_pretty(config).with_context(|| "Failed to serialize config to TOML")?;

    std::fs::write(config_path, content)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(())
}

pub fn config_exists() -> bool {
    get_config_path().exists()
}
