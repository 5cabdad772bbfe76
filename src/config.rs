//! Configuration loading for the blogmark CLI.
//!
//! Settings live in `blogmark.toml` or `.blogmark.toml`, discovered in the
//! working directory or the nearest ancestor that has one. Everything has a
//! default, so no config file is required.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names probed during discovery, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["blogmark.toml", ".blogmark.toml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub preview: PreviewConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Number of words a preview is truncated to.
    pub word_limit: usize,
    /// Marker appended when a preview is truncated.
    pub ellipsis: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            word_limit: 20,
            ellipsis: crate::preview::ELLIPSIS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory exported files are written into.
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or discover one starting at
    /// `start_dir` and walking up. Returns defaults when nothing is found.
    pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match discover(start_dir) {
                Some(path) => {
                    log::debug!("using config file {}", path.display());
                    Self::from_file(&path)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Parse one TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }
}

/// Find the nearest config file at or above `start_dir`.
fn discover(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = Some(start_dir);
    while let Some(current) = dir {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        dir = current.parent();
    }
    None
}
