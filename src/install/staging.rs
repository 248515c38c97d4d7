//! Staging directory lifecycle for a single install invocation.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::FeaturekitConfig;

use super::error::Result;

/// Guard owning the staging directory of one install invocation.
///
/// The directory is created fresh on construction and removed when the
/// guard drops, whether the install succeeded or failed. It never outlives
/// the invocation.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Create the staging directory, replacing any stale one left behind by
    /// a crashed run.
    pub fn create(config: &FeaturekitConfig) -> Result<Self> {
        let path = config.staging_dir();
        if path.exists() {
            std::fs::remove_dir_all(&path)?;
        }
        std::fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    /// Path of the staging directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_dir_all(&self.path) {
                warn!(
                    "Failed to remove staging directory {}: {e}",
                    self.path.display()
                );
            }
        }
    }
}
