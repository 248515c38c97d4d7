//! Dependency installation from a requirements manifest.
//!
//! When the resolved source contains a `requirements.txt`, every listed
//! specifier is handed to the configured package manager in a subprocess.
//! The manifest is consumed once per install call and not persisted.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::config::FeaturekitConfig;

use super::error::{InstallError, Result};

/// File name of the requirements manifest.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Install dependencies declared in `dir`, if a manifest is present.
///
/// Returns `true` when the package manager was invoked, `false` when there
/// was no manifest (or it listed nothing).
///
/// # Errors
///
/// Returns an error carrying the subprocess stderr when the package manager
/// exits non-zero.
pub fn install_requirements(config: &FeaturekitConfig, dir: &Path) -> Result<bool> {
    let manifest = dir.join(REQUIREMENTS_FILE);
    if !manifest.exists() {
        return Ok(false);
    }

    let content = std::fs::read_to_string(&manifest)?;
    let specs: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    if specs.is_empty() {
        return Ok(false);
    }

    info!(
        "Installing {} requirement(s) with {}",
        specs.len(),
        config.package_manager
    );
    let output = Command::new(&config.package_manager)
        .arg("install")
        .args(&specs)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(InstallError::DependencyInstall {
            manifest: manifest.display().to_string(),
            message: stderr.trim().to_string(),
        });
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> tempfile::TempDir {
        match tempfile::TempDir::new() {
            Ok(dir) => dir,
            Err(e) => panic!("Failed to create temp dir: {e}"),
        }
    }

    fn config_with_manager(manager: &str) -> FeaturekitConfig {
        FeaturekitConfig {
            package_manager: manager.to_string(),
            ..Default::default()
        }
    }

    fn write_manifest(dir: &Path, content: &str) {
        if let Err(e) = std::fs::write(dir.join(REQUIREMENTS_FILE), content) {
            panic!("Failed to write manifest: {e}");
        }
    }

    #[test]
    fn test_no_manifest_is_a_noop() {
        let temp = temp_dir();
        let Ok(ran) = install_requirements(&config_with_manager("pip"), temp.path()) else {
            panic!("missing manifest should be a no-op");
        };
        assert!(!ran);
    }

    #[test]
    fn test_empty_manifest_is_a_noop() {
        let temp = temp_dir();
        write_manifest(temp.path(), "# comment only\n\n");
        let Ok(ran) = install_requirements(&config_with_manager("pip"), temp.path()) else {
            panic!("empty manifest should be a no-op");
        };
        assert!(!ran);
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_install_runs_manager() {
        let temp = temp_dir();
        write_manifest(temp.path(), "featurekit-pip-tester\n");
        let Ok(ran) = install_requirements(&config_with_manager("true"), temp.path()) else {
            panic!("successful manager exit should succeed");
        };
        assert!(ran);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_manager_propagates() {
        let temp = temp_dir();
        write_manifest(temp.path(), "featurekit-pip-tester\n");
        let result = install_requirements(&config_with_manager("false"), temp.path());
        assert!(matches!(
            result,
            Err(InstallError::DependencyInstall { .. })
        ));
    }

    #[test]
    fn test_missing_manager_is_an_io_error() {
        let temp = temp_dir();
        write_manifest(temp.path(), "featurekit-pip-tester\n");
        let result = install_requirements(
            &config_with_manager("featurekit-no-such-manager"),
            temp.path(),
        );
        assert!(matches!(result, Err(InstallError::Io { .. })));
    }
}
