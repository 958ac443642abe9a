use crate::case::CaseStyle;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub style: CaseStyle,
    pub format: OutputFormat,
    pub color: bool,
    pub fail_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: CaseStyle::Camel,
            format: OutputFormat::Text,
            color: true,
            fail_on_error: true,
        }
    }
}

/// One config file; anything left out falls through to the layer below
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    style: Option<CaseStyle>,
    format: Option<OutputFormat>,
    color: Option<bool>,
    fail_on_error: Option<bool>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub style: Option<CaseStyle>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub no_fail: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: CliOverrides) -> Result<Self> {
        let global = Self::global_config_path();
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        Self::load_from(global.as_deref(), &local, overrides)
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: CliOverrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                config = config.merge(Self::layer_from_file(global_path)?);
                debug!(path = %global_path.display(), "loaded global config");
            }
        }

        if local.exists() {
            config = config.merge(Self::layer_from_file(local)?);
            debug!(path = %local.display(), "loaded local config");
        }

        Ok(config.apply(overrides))
    }

    fn layer_from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(fail_on_error) = layer.fail_on_error {
            self.fail_on_error = fail_on_error;
        }
        self
    }

    fn apply(mut self, overrides: CliOverrides) -> Self {
        if let Some(style) = overrides.style {
            self.style = style;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.no_color {
            self.color = false;
        }
        if overrides.no_fail {
            self.fail_on_error = false;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
