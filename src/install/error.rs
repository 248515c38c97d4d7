//! Error types for primitive installation.

use std::fmt;

use super::archive::SUPPORTED_SUFFIXES;

/// Errors that can occur while installing primitives.
#[derive(Debug)]
pub enum InstallError {
    /// Error performing I/O operations
    Io { source: std::io::Error },

    /// Error downloading files
    Download {
        url: String,
        source: reqwest::Error,
    },

    /// Non-success HTTP status while downloading
    DownloadStatus { url: String, status: u16 },

    /// Error parsing a TOML definition file
    TomlParse {
        path: String,
        source: toml::de::Error,
    },

    /// Input string matches no recognized source form
    UnsupportedSource { spec: String },

    /// File does not end in a supported archive suffix
    UnrecognizedArchive { path: String },

    /// Archive extraction failed
    ExtractionFailed {
        path: String,
        source: std::io::Error,
    },

    /// Definition file has no qualifying primitive
    NoPrimitive { path: String },

    /// Definition file has more than one qualifying primitive
    MultiplePrimitives { path: String },

    /// Package-manager subprocess exited non-zero
    DependencyInstall { manifest: String, message: String },
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "I/O error: {source}"),
            Self::Download { url, source } => write!(f, "Failed to download {url}: {source}"),
            Self::DownloadStatus { url, status } => {
                write!(f, "HTTP {status} when downloading {url}")
            }
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse definition file {path}: {source}")
            }
            Self::UnsupportedSource { spec } => {
                write!(f, "Unsupported installation source: {spec}")
            }
            Self::UnrecognizedArchive { path } => {
                write!(
                    f,
                    "Cannot extract archive from {path}. Must provide archive ending in {}",
                    SUPPORTED_SUFFIXES.join(" or ")
                )
            }
            Self::ExtractionFailed { path, source } => {
                write!(f, "Failed to extract archive at {path}: {source}")
            }
            Self::NoPrimitive { path } => {
                write!(f, "No primitive defined in file {path}")
            }
            Self::MultiplePrimitives { path } => {
                write!(f, "More than one primitive defined in file {path}")
            }
            Self::DependencyInstall { manifest, message } => {
                write!(f, "Failed to install requirements from {manifest}: {message}")
            }
        }
    }
}

impl std::error::Error for InstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Download { source, .. } => Some(source),
            Self::TomlParse { source, .. } => Some(source),
            Self::ExtractionFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InstallError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<reqwest::Error> for InstallError {
    fn from(source: reqwest::Error) -> Self {
        Self::Download {
            url: "<unknown>".to_string(),
            source,
        }
    }
}

/// Result type for installation operations.
pub type Result<T> = std::result::Result<T, InstallError>;
