//! Discovery and loading of primitive definition files.
//!
//! A candidate file is any non-hidden `.toml` file. Loading parses the file,
//! filters its `[[primitive]]` entries by the capability contract, and
//! requires exactly one qualifying entry.

use std::path::{Path, PathBuf};

use crate::primitives::definition::{LoadedPrimitive, PrimitiveDefinition};

use super::error::{InstallError, Result};

/// File extension of primitive definition files.
pub const DEFINITION_EXTENSION: &str = "toml";

/// Enumerate candidate definition files in `dir` without loading them.
///
/// Returns the paths sorted by file name.
pub fn list_primitive_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if is_definition_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Whether a path looks like a primitive definition file.
pub fn is_definition_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'));
    let extension = path.extension().and_then(|e| e.to_str());
    !hidden && extension == Some(DEFINITION_EXTENSION)
}

/// Load a primitive definition file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read or is not valid TOML
/// - No entry qualifies (`No primitive defined in file <path>`)
/// - More than one entry qualifies
///   (`More than one primitive defined in file <path>`)
pub fn load_primitive_from_file(path: &Path) -> Result<(String, LoadedPrimitive)> {
    let content = std::fs::read_to_string(path)?;
    let value: toml::Value =
        toml::from_str(&content).map_err(|e| InstallError::TomlParse {
            path: path.display().to_string(),
            source: e,
        })?;

    let entries = value
        .get("primitive")
        .and_then(toml::Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut qualifying = entries
        .into_iter()
        .filter_map(|entry| entry.try_into::<PrimitiveDefinition>().ok())
        .filter_map(LoadedPrimitive::resolve);

    let Some(primitive) = qualifying.next() else {
        return Err(InstallError::NoPrimitive {
            path: path.display().to_string(),
        });
    };
    if qualifying.next().is_some() {
        return Err(InstallError::MultiplePrimitives {
            path: path.display().to_string(),
        });
    }

    let name = primitive.definition().name.clone();
    Ok((name, primitive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Primitive, PrimitiveKind};

    fn temp_dir() -> tempfile::TempDir {
        match tempfile::TempDir::new() {
            Ok(dir) => dir,
            Err(e) => panic!("Failed to create temp dir: {e}"),
        }
    }

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Err(e) = std::fs::write(&path, content) {
            panic!("Failed to write {name}: {e}");
        }
        path
    }

    const CUSTOM_MAX: &str = r#"
[[primitive]]
name = "custom_max"
kind = "aggregation"
function = "max"
description = "Maximum value of a numeric column"
"#;

    #[test]
    fn test_list_primitive_files() {
        let temp = temp_dir();
        let custom_max = write_file(temp.path(), "custom_max.toml", CUSTOM_MAX);
        let custom_mean = write_file(temp.path(), "custom_mean.toml", "");
        let custom_sum = write_file(temp.path(), "custom_sum.toml", "");
        write_file(temp.path(), "requirements.txt", "some-package");
        write_file(temp.path(), "features.csv", "id,value\n");
        write_file(temp.path(), ".hidden.toml", "");

        let Ok(files) = list_primitive_files(temp.path()) else {
            panic!("listing should succeed");
        };
        let expected: std::collections::HashSet<PathBuf> =
            [custom_max, custom_mean, custom_sum].into_iter().collect();
        let listed: std::collections::HashSet<PathBuf> = files.into_iter().collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_load_primitive_from_file() {
        let temp = temp_dir();
        let path = write_file(temp.path(), "custom_max.toml", CUSTOM_MAX);

        let Ok((name, primitive)) = load_primitive_from_file(&path) else {
            panic!("load should succeed");
        };
        assert_eq!(name, "custom_max");

        let contract: &dyn Primitive = &primitive;
        assert_eq!(contract.name(), "custom_max");
        assert_eq!(contract.kind(), PrimitiveKind::Aggregation);
    }

    #[test]
    fn test_errors_no_primitive_in_file() {
        let temp = temp_dir();
        let path = write_file(temp.path(), "no_primitives.toml", "");

        let Err(err) = load_primitive_from_file(&path) else {
            panic!("expected load to fail");
        };
        assert_eq!(
            err.to_string(),
            format!("No primitive defined in file {}", path.display())
        );
    }

    #[test]
    fn test_errors_more_than_one_primitive_in_file() {
        let content = r#"
[[primitive]]
name = "custom_max"
kind = "aggregation"
function = "max"

[[primitive]]
name = "custom_min"
kind = "aggregation"
function = "min"
"#;
        let temp = temp_dir();
        let path = write_file(temp.path(), "multiple_primitives.toml", content);

        let Err(err) = load_primitive_from_file(&path) else {
            panic!("expected load to fail");
        };
        assert_eq!(
            err.to_string(),
            format!("More than one primitive defined in file {}", path.display())
        );
    }

    #[test]
    fn test_unqualifying_entries_do_not_count() {
        // One recognized function next to one unknown function: the unknown
        // entry does not qualify, so the file still defines one primitive.
        let content = r#"
[[primitive]]
name = "custom_max"
kind = "aggregation"
function = "max"

[[primitive]]
name = "custom_frob"
kind = "aggregation"
function = "frobnicate"
"#;
        let temp = temp_dir();
        let path = write_file(temp.path(), "custom_max.toml", content);

        let Ok((name, _)) = load_primitive_from_file(&path) else {
            panic!("load should succeed");
        };
        assert_eq!(name, "custom_max");
    }

    #[test]
    fn test_malformed_toml_errors() {
        let temp = temp_dir();
        let path = write_file(temp.path(), "broken.toml", "[[primitive]\nname=");

        let result = load_primitive_from_file(&path);
        assert!(matches!(result, Err(InstallError::TomlParse { .. })));
    }
}
