//! Archive extraction for primitive bundles.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use super::error::{InstallError, Result};

/// Archive suffixes the extractor accepts.
pub const SUPPORTED_SUFFIXES: [&str; 2] = [".tar", ".tar.gz"];

/// Extract a `.tar` or `.tar.gz` archive into `dest`.
///
/// Returns the directory containing the extracted contents: when the archive
/// holds a single top-level directory (the usual bundle layout) that
/// directory is returned, otherwise `dest` itself.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not end in a supported archive suffix
/// - The archive cannot be opened or unpacked
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<PathBuf> {
    let name = archive.to_string_lossy();
    let gzipped = if name.ends_with(".tar.gz") {
        true
    } else if name.ends_with(".tar") {
        false
    } else {
        return Err(InstallError::UnrecognizedArchive {
            path: name.into_owned(),
        });
    };

    std::fs::create_dir_all(dest)?;
    let file = File::open(archive)?;
    let reader: Box<dyn std::io::Read> = if gzipped {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let mut tar = tar::Archive::new(reader);
    tar.unpack(dest).map_err(|e| InstallError::ExtractionFailed {
        path: name.into_owned(),
        source: e,
    })?;

    Ok(extracted_root(dest).unwrap_or_else(|| dest.to_path_buf()))
}

/// The single extracted top-level directory, when there is exactly one entry
/// and it is a directory.
fn extracted_root(dest: &Path) -> Option<PathBuf> {
    let mut entries = std::fs::read_dir(dest).ok()?;
    let first = entries.next()?.ok()?;
    if entries.next().is_some() {
        return None;
    }
    let path = first.path();
    path.is_dir().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    fn build_archive(dir: &Path, gzipped: bool) -> PathBuf {
        let name = if gzipped { "bundle.tar.gz" } else { "bundle.tar" };
        let archive_path = dir.join(name);
        let file = match File::create(&archive_path) {
            Ok(f) => f,
            Err(e) => panic!("Failed to create archive file: {e}"),
        };

        let writer: Box<dyn std::io::Write> = if gzipped {
            Box::new(GzEncoder::new(file, Compression::default()))
        } else {
            Box::new(file)
        };
        let mut builder = tar::Builder::new(writer);
        let mut header = tar::Header::new_gnu();
        let content = b"[[primitive]]\nname = \"custom_max\"\nkind = \"aggregation\"\nfunction = \"max\"\n";
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        if let Err(e) =
            builder.append_data(&mut header, "bundle/custom_max.toml", content.as_slice())
        {
            panic!("Failed to append archive entry: {e}");
        }
        if let Err(e) = builder.into_inner().and_then(|mut w| w.flush()) {
            panic!("Failed to finish archive: {e}");
        }
        archive_path
    }

    fn temp_dir() -> tempfile::TempDir {
        match tempfile::TempDir::new() {
            Ok(dir) => dir,
            Err(e) => panic!("Failed to create temp dir: {e}"),
        }
    }

    #[test]
    fn test_extract_tar_gz() {
        let temp = temp_dir();
        let archive = build_archive(temp.path(), true);

        let Ok(extracted) = extract_archive(&archive, &temp.path().join("out")) else {
            panic!("extraction should succeed");
        };
        assert!(extracted.ends_with("bundle"));
        assert!(extracted.join("custom_max.toml").exists());
    }

    #[test]
    fn test_extract_plain_tar() {
        let temp = temp_dir();
        let archive = build_archive(temp.path(), false);

        let Ok(extracted) = extract_archive(&archive, &temp.path().join("out")) else {
            panic!("extraction should succeed");
        };
        assert!(extracted.join("custom_max.toml").exists());
    }

    #[test]
    fn test_extract_non_archive_errors() {
        let temp = temp_dir();
        let not_an_archive = temp.path().join("no_primitives.toml");
        if let Err(e) = std::fs::write(&not_an_archive, "") {
            panic!("Failed to write file: {e}");
        }

        let Err(err) = extract_archive(&not_an_archive, &temp.path().join("out")) else {
            panic!("expected extraction to fail");
        };
        assert_eq!(
            err.to_string(),
            format!(
                "Cannot extract archive from {}. Must provide archive ending in .tar or .tar.gz",
                not_an_archive.display()
            )
        );
    }

    #[test]
    fn test_extract_missing_archive_errors() {
        let temp = temp_dir();
        let result = extract_archive(&temp.path().join("missing.tar"), &temp.path().join("out"));
        assert!(matches!(result, Err(InstallError::Io { .. })));
    }
}
