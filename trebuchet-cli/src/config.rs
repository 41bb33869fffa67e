//! Run configuration loaded from TOML, then overridden from the command line.

use crate::cli::Cli;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Input processed when neither the config file nor the command line names one.
pub const DEFAULT_INPUT: &str = "./day_01/data/calibration.txt";

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "trebuchet.toml";

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Calibration file to read.
    pub input: PathBuf,
    /// Convert spelled-out numbers to digits before extraction.
    pub word_normalization: bool,
    /// Print the per-line breakdown.
    pub report: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            word_normalization: true,
            report: false,
        }
    }
}

impl RunConfig {
    /// Load from a TOML file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Load from a TOML file, falling back to defaults when it is absent.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Resolve the configuration for `cli`: config file first, then flags.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::load_optional(Path::new(DEFAULT_CONFIG_FILE))?,
        };
        config.apply_overrides(cli);
        log::debug!("resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Command-line values win over file values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }
        if cli.digits_only {
            self.word_normalization = false;
        }
        if cli.report {
            self.report = true;
        }
    }
}
