use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Number of columns the tables flow into
    pub columns: u32,
    /// Heading shown above the tables
    pub title: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            title: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Draw a horizontal rule after every table
    pub trailing_rule: bool,
}

impl Config {
    /// The defaults bundled with the binary.
    pub fn compiled_default() -> Self {
        // build.rs checks the file parses and only holds known sections
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            warn!("bundled default config does not match Config: {e}");
            Self::default()
        })
    }

    /// Load config from a TOML file. Keys missing from the file keep
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
