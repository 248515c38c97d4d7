//! Orchestration of primitive installation.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use dialoguer::Confirm;
use tracing::info;

use crate::config::FeaturekitConfig;

use super::error::Result;
use super::loader::{is_definition_file, list_primitive_files, load_primitive_from_file};
use super::requirements::{install_requirements, REQUIREMENTS_FILE};
use super::source::InstallSource;
use super::staging::StagingDir;

/// Installer for primitive definition bundles.
#[derive(Debug, Clone)]
pub struct Installer {
    config: FeaturekitConfig,
}

/// Installation options.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Source spec: directory, archive path, or URL.
    pub source: String,
    /// Ask for confirmation before installing.
    pub prompt: bool,
}

/// Installation result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallResult {
    /// Names of the installed primitives.
    pub primitives: Vec<String>,
    /// Data files copied into the data directory.
    pub data_files: Vec<PathBuf>,
}

impl Installer {
    /// Create a new installer.
    pub fn new(config: FeaturekitConfig) -> Self {
        Self { config }
    }

    /// The configuration this installer writes into.
    pub fn config(&self) -> &FeaturekitConfig {
        &self.config
    }

    /// Install primitives from a source.
    ///
    /// # Process
    ///
    /// 1. Resolve the source into the staging directory (download and
    ///    extract as needed)
    /// 2. Validate every candidate definition file, aborting on the first
    ///    invalid one
    /// 3. Confirm with the user (suppressed by `prompt = false` or a
    ///    non-interactive terminal)
    /// 4. Install dependencies from the requirements manifest, if present
    /// 5. Copy definition files into the installation directory and data
    ///    files into the data directory
    ///
    /// The staging directory is removed on every exit path. Files already
    /// copied before a failure are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source spec matches no recognized form
    /// - Download or extraction fails
    /// - Any definition file fails validation
    /// - The package manager exits non-zero
    /// - A filesystem operation fails
    pub async fn install(&self, options: InstallOptions) -> Result<InstallResult> {
        self.config.ensure_dirs()?;

        let staging = StagingDir::create(&self.config)?;
        // The guard drops on both paths below; no cleanup branch needed.
        self.run(&options, staging.path()).await
    }

    async fn run(&self, options: &InstallOptions, staging: &Path) -> Result<InstallResult> {
        let source = InstallSource::parse(&options.source)?;
        let resolved = source.stage(staging).await?;

        let files = list_primitive_files(&resolved)?;
        let mut primitives = Vec::new();
        for file in &files {
            let (name, _primitive) = load_primitive_from_file(file)?;
            primitives.push(name);
        }

        if options.prompt && is_tty() && !confirm_install(&primitives)? {
            eprintln!("Installation cancelled");
            return Ok(InstallResult::default());
        }

        install_requirements(&self.config, &resolved)?;

        for file in &files {
            let Some(name) = file.file_name() else {
                continue;
            };
            std::fs::copy(file, self.config.primitive_install_dir.join(name))?;
        }
        let data_files = self.copy_data_files(&resolved)?;

        info!(
            "Installed {} primitive(s) into {}",
            primitives.len(),
            self.config.primitive_install_dir.display()
        );
        eprintln!("Successfully installed: {}", primitives.join(", "));

        Ok(InstallResult {
            primitives,
            data_files,
        })
    }

    /// Copy non-definition files from the resolved source into the data
    /// directory. Only top-level regular files are considered.
    fn copy_data_files(&self, resolved: &Path) -> Result<Vec<PathBuf>> {
        let mut copied = Vec::new();
        for entry in std::fs::read_dir(resolved)? {
            let path = entry?.path();
            if !path.is_file() || is_definition_file(&path) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') || name == REQUIREMENTS_FILE {
                continue;
            }
            let dest = self.config.primitive_data_dir.join(name);
            std::fs::copy(&path, &dest)?;
            copied.push(dest);
        }
        copied.sort();
        Ok(copied)
    }
}

/// Check if stderr is a TTY.
fn is_tty() -> bool {
    std::io::stderr().is_terminal()
}

/// Prompt the user to confirm installing the named primitives.
fn confirm_install(names: &[String]) -> Result<bool> {
    let prompt = format!("Install primitives: {}?", names.join(", "));
    let result = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(result)
}
