//! Registry of installed primitives.
//!
//! Loads every definition file from the installation directory, making the
//! installed primitives available by name.

use std::collections::BTreeMap;

use crate::config::FeaturekitConfig;
use crate::install::error::Result;
use crate::install::loader::{list_primitive_files, load_primitive_from_file};

use super::definition::LoadedPrimitive;

/// Name-keyed registry of the currently installed primitives.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveRegistry {
    primitives: BTreeMap<String, LoadedPrimitive>,
}

impl PrimitiveRegistry {
    /// Load all installed primitives from the installation directory.
    ///
    /// An installation directory that does not exist yet yields an empty
    /// registry. A definition file that fails validation is an error - the
    /// installer only copies validated files, so this indicates a manually
    /// edited installation directory.
    pub fn load(config: &FeaturekitConfig) -> Result<Self> {
        let dir = &config.primitive_install_dir;
        if !dir.exists() {
            return Ok(Self::default());
        }

        let mut primitives = BTreeMap::new();
        for file in list_primitive_files(dir)? {
            let (name, primitive) = load_primitive_from_file(&file)?;
            primitives.insert(name, primitive);
        }
        Ok(Self { primitives })
    }

    /// Look up an installed primitive by name.
    pub fn get(&self, name: &str) -> Option<&LoadedPrimitive> {
        self.primitives.get(name)
    }

    /// Iterate over installed primitives in name order.
    pub fn iter(&self) -> impl Iterator<Item = &LoadedPrimitive> {
        self.primitives.values()
    }

    /// Names of the installed primitives, in order.
    pub fn names(&self) -> Vec<&str> {
        self.primitives.keys().map(String::as_str).collect()
    }

    /// Number of installed primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether no primitives are installed.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
