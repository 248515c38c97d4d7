//! Resolution of installation sources to local directories.
//!
//! A source spec is one of: a local directory, a local archive file, an
//! `http(s)://` URL, or an `s3://` URI. Remote archives are downloaded into
//! the staging directory before extraction.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use super::archive::extract_archive;
use super::error::{InstallError, Result};

/// Host serving public S3 objects over HTTPS.
const S3_HTTPS_HOST: &str = "https://s3.amazonaws.com";

/// A parsed installation source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    /// A local directory containing definition files.
    Directory(PathBuf),
    /// A local archive file.
    Archive(PathBuf),
    /// A remote archive reachable over HTTP(S).
    Remote(String),
}

impl InstallSource {
    /// Parse a source spec.
    ///
    /// `s3://bucket/key` URIs are rewritten to their public HTTPS object
    /// URL. Local files are treated as archives; the extractor validates
    /// the suffix.
    ///
    /// # Errors
    ///
    /// Returns the unsupported-source error when the spec matches no
    /// recognized form.
    pub fn parse(spec: &str) -> Result<Self> {
        if let Some(rest) = spec.strip_prefix("s3://") {
            return Ok(Self::Remote(format!("{S3_HTTPS_HOST}/{rest}")));
        }
        if spec.starts_with("https://") || spec.starts_with("http://") {
            return Ok(Self::Remote(spec.to_string()));
        }

        let path = Path::new(spec);
        if path.is_dir() {
            return Ok(Self::Directory(path.to_path_buf()));
        }
        if path.is_file() {
            return Ok(Self::Archive(path.to_path_buf()));
        }

        Err(InstallError::UnsupportedSource {
            spec: spec.to_string(),
        })
    }

    /// Produce a local directory of candidate files inside `staging`.
    ///
    /// Directories pass through untouched; archives extract into the
    /// staging directory; remote URLs download into the staging directory
    /// and then extract.
    pub async fn stage(&self, staging: &Path) -> Result<PathBuf> {
        match self {
            Self::Directory(dir) => Ok(dir.clone()),
            Self::Archive(archive) => extract_archive(archive, &staging.join("extracted")),
            Self::Remote(url) => {
                let archive = staging.join(remote_file_name(url));
                eprintln!("Downloading {url}...");
                download(url, &archive).await?;
                extract_archive(&archive, &staging.join("extracted"))
            }
        }
    }
}

/// File name for a downloaded archive, taken from the last URL segment.
fn remote_file_name(url: &str) -> String {
    let name = url
        .rsplit('/')
        .next()
        .and_then(|segment| segment.split(['?', '#']).next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("download");
    name.to_string()
}

/// Download a remote file to `dest`.
async fn download(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| InstallError::Download {
            url: url.to_string(),
            source: e,
        })?;

    if !response.status().is_success() {
        return Err(InstallError::DownloadStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let total_size = response.content_length().unwrap_or(0);
    let pb = if total_size > 0 {
        let bar = ProgressBar::new(total_size);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(bar)
    } else {
        None
    };

    let bytes = response.bytes().await.map_err(|e| InstallError::Download {
        url: url.to_string(),
        source: e,
    })?;

    if let Some(ref bar) = pb {
        bar.inc(bytes.len() as u64);
        bar.finish_with_message("Downloaded");
    }

    std::fs::write(dest, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_s3_uri() {
        let source = match InstallSource::parse("s3://featurekit-static/primitives.tar.gz") {
            Ok(s) => s,
            Err(e) => panic!("s3 URI should parse: {e}"),
        };
        assert_eq!(
            source,
            InstallSource::Remote(
                "https://s3.amazonaws.com/featurekit-static/primitives.tar.gz".to_string()
            )
        );
    }

    #[test]
    fn test_parse_https_url() {
        let url = "https://s3.amazonaws.com/featurekit-static/primitives.tar.gz";
        let source = match InstallSource::parse(url) {
            Ok(s) => s,
            Err(e) => panic!("URL should parse: {e}"),
        };
        assert_eq!(source, InstallSource::Remote(url.to_string()));
    }

    #[test]
    fn test_parse_local_directory() {
        let temp = match tempfile::TempDir::new() {
            Ok(dir) => dir,
            Err(e) => panic!("Failed to create temp dir: {e}"),
        };
        let source = match InstallSource::parse(&temp.path().to_string_lossy()) {
            Ok(s) => s,
            Err(e) => panic!("directory should parse: {e}"),
        };
        assert_eq!(source, InstallSource::Directory(temp.path().to_path_buf()));
    }

    #[test]
    fn test_parse_local_file_is_archive() {
        let temp = match tempfile::TempDir::new() {
            Ok(dir) => dir,
            Err(e) => panic!("Failed to create temp dir: {e}"),
        };
        let file = temp.path().join("bundle.tar.gz");
        if let Err(e) = std::fs::write(&file, "") {
            panic!("Failed to write file: {e}");
        }
        let source = match InstallSource::parse(&file.to_string_lossy()) {
            Ok(s) => s,
            Err(e) => panic!("file should parse: {e}"),
        };
        assert_eq!(source, InstallSource::Archive(file));
    }

    #[test]
    fn test_parse_unsupported_source() {
        let Err(err) = InstallSource::parse("/no/such/path") else {
            panic!("expected parse to fail");
        };
        assert_eq!(
            err.to_string(),
            "Unsupported installation source: /no/such/path"
        );
    }

    #[test]
    fn test_remote_file_name() {
        assert_eq!(
            remote_file_name("https://example.com/bundles/primitives.tar.gz"),
            "primitives.tar.gz"
        );
        assert_eq!(
            remote_file_name("https://example.com/bundles/primitives.tar.gz?sig=abc"),
            "primitives.tar.gz"
        );
        assert_eq!(remote_file_name("https://example.com/"), "download");
    }
}
