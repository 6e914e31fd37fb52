use crate::config::serialize_config;
use crate::layouts::{is_valid_ratio, SplitType, DEFAULT_SPLIT_RATIO};
use crate::paths;
use log::{trace, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine default config directory")]
    NoConfigDir,

    #[error("Failed to access config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// The path the config file was loaded from
    #[serde(skip)]
    #[schemars(skip)]
    pub config_path: Option<PathBuf>,

    /// The number of workspaces
    pub workspaces: usize,
    /// How new windows split the focused window (vertical or horizontal)
    pub new_window_split: SplitType,
    /// The share of the space the focused window keeps when a new window opens (0.0 - 1.0, exclusive)
    pub split_ratio: f64,
    /// Whether to tag new windows automatically
    pub auto_tag: bool,
    /// The characters handed out as tags, in order
    pub tag_alphabet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            workspaces: 8,
            new_window_split: SplitType::Vertical,
            split_ratio: DEFAULT_SPLIT_RATIO,
            auto_tag: true,
            tag_alphabet: String::from("asdfghjkl"),
        }
    }
}

impl Config {
    pub fn default_config_path() -> Option<PathBuf> {
        paths::default_config_path()
    }

    /// Loads the config from `config_path`, or from the default location. A missing file is
    /// created with the defaults first.
    pub fn load(config_path: Option<&Path>, save: bool) -> ConfigResult<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path().ok_or(ConfigError::NoConfigDir)?,
        };

        if !path.exists() {
            Config::default().save_to_file(&path)?;
            trace!("Created default config file at: {}", path.display());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let mut config = Self::from_yaml(&contents).map_err(|e| match e {
            ConfigError::Serialize(source) => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        config.config_path = Some(path.clone());

        // Writes back any fields the file was missing
        if save {
            if let Err(e) = config.save_to_file(&path) {
                warn!("Failed to update config file with missing fields: {e}");
            }
        }

        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.workspaces == 0 {
            return Err(ConfigError::Invalid(String::from(
                "at least one workspace is required",
            )));
        }
        if !is_valid_ratio(self.split_ratio) {
            return Err(ConfigError::Invalid(format!(
                "split_ratio must be strictly between 0 and 1, got {}",
                self.split_ratio
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.tag_alphabet.chars().find(|c| !seen.insert(*c)) {
            return Err(ConfigError::Invalid(format!(
                "tag_alphabet contains '{dup}' more than once"
            )));
        }
        Ok(())
    }

    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serialize_config(self)?;
        fs::write(path, content).map_err(io_error)?;
        Ok(())
    }
}
