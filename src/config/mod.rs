//! CLI configuration
//!
//! Loaded from YAML, then overridden by command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Quad serialization format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Nquads,
    Jsonl,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Graph receiving provenance and label quads; none disables them
    pub metadata_graph: Option<String>,
    pub format: OutputFormat,
    /// Extractor names to run; empty means every registered extractor
    pub extractors: Vec<String>,
}

/// Flag values that override the file, `None`/empty meaning "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub metadata_graph: Option<String>,
    pub format: Option<OutputFormat>,
    pub extractors: Vec<String>,
}

impl Config {
    pub fn from_yaml_str(yaml: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml, path)
    }

    /// Load `explicit` if given, else the default file if it exists, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn merge_cli(mut self, cli: CliOverrides) -> Self {
        if cli.metadata_graph.is_some() {
            self.metadata_graph = cli.metadata_graph;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if !cli.extractors.is_empty() {
            self.extractors = cli.extractors;
        }
        self
    }
}

/// `~/.config/hcalrdf/config.yaml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hcalrdf").join("config.yaml"))
}
