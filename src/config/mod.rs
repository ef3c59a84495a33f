use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use log::info;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = ".transaction-analyser.toml";

/// How the loader treats a record whose amount cannot be parsed
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ParseMode {
    /// Skip the record and report it
    #[default]
    Strict,
    /// Keep the record with a NaN amount
    Lenient,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) parse_mode: ParseMode,
    /// Extra chrono formats tried after the built-in date formats
    pub(crate) date_formats: Vec<String>,
}

impl Config {
    pub(crate) fn empty() -> Config {
        Config::default()
    }

    /// Load config from a TOML file. A missing file gives the default config.
    pub(crate) fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        if path.exists() && path.is_file() {
            info!("Loading config from {}", path.display());
            let content = fs::read_to_string(path)
                .with_context(|| format!("Unable to read config file {}", path.display()))?;
            Config::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
        } else {
            Ok(Config::empty())
        }
    }

    /// Load a config file the user asked for by name. Unlike [`Config::load_from_file`] the file must exist.
    pub(crate) fn load_from_given_file(path: &Path) -> anyhow::Result<Config> {
        anyhow::ensure!(path.is_file(), "Config file {} not found", path.display());
        Config::load_from_file(path)
    }

    pub(crate) fn parse(content: &str) -> anyhow::Result<Config> {
        Ok(toml::from_str::<Config>(content)?)
    }
}

/// ~/.transaction-analyser.toml
pub(crate) fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}
