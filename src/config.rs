//! Configuration loading and management for featurekit.
//!
//! The configuration is stored in TOML format and defines:
//! - The installation directory for primitive definition files
//! - The data directory for auxiliary data files
//! - The package manager used for requirements manifests

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Complete featurekit configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturekitConfig {
    /// Directory where primitive definition files are installed.
    #[serde(default = "default_install_dir")]
    pub primitive_install_dir: PathBuf,

    /// Directory where auxiliary data files are installed.
    #[serde(default = "default_data_dir")]
    pub primitive_data_dir: PathBuf,

    /// Package manager executable used for requirements manifests.
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
}

fn default_base_dir() -> PathBuf {
    directories::ProjectDirs::from("dev", "featurekit", "featurekit")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/featurekit"))
}

fn default_install_dir() -> PathBuf {
    default_base_dir().join("primitives")
}

fn default_data_dir() -> PathBuf {
    default_base_dir().join("primitive_data")
}

fn default_package_manager() -> String {
    "pip".to_string()
}

impl Default for FeaturekitConfig {
    fn default() -> Self {
        Self {
            primitive_install_dir: default_install_dir(),
            primitive_data_dir: default_data_dir(),
            package_manager: default_package_manager(),
        }
    }
}

impl FeaturekitConfig {
    /// Load configuration from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: FeaturekitConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply `FEATUREKIT_*` environment variable overrides.
    ///
    /// Environment variables win over both defaults and config file values:
    /// `FEATUREKIT_PRIMITIVE_INSTALL_DIR`, `FEATUREKIT_PRIMITIVE_DATA_DIR`,
    /// `FEATUREKIT_PACKAGE_MANAGER`.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var("FEATUREKIT_PRIMITIVE_INSTALL_DIR") {
            self.primitive_install_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("FEATUREKIT_PRIMITIVE_DATA_DIR") {
            self.primitive_data_dir = PathBuf::from(dir);
        }
        if let Ok(manager) = std::env::var("FEATUREKIT_PACKAGE_MANAGER") {
            self.package_manager = manager;
        }
        self
    }

    /// The staging directory used by a single install invocation.
    ///
    /// Lives under the installation directory so a failed run is easy to
    /// inspect; the installer guarantees it is removed on every exit path.
    #[must_use]
    pub fn staging_dir(&self) -> PathBuf {
        self.primitive_install_dir.join(".tmp")
    }

    /// Create the installation and data directories if they don't exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.primitive_install_dir)?;
        std::fs::create_dir_all(&self.primitive_data_dir)?;
        Ok(())
    }
}
