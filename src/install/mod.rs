//! Installation of user-authored primitives.
//!
//! The installer takes primitive definition bundles and makes them part of
//! the local featurekit installation:
//! - Resolve a source spec (directory, `.tar`/`.tar.gz` archive, URL,
//!   `s3://` URI) to a local directory
//! - Validate every definition file (exactly one primitive per file)
//! - Install declared package dependencies from `requirements.txt`
//! - Copy definitions into the installation directory and data files into
//!   the data directory
//!
//! # Pipeline
//!
//! ```text
//! source spec ──▶ resolve ──▶ staging dir ──▶ validate ──▶ deps ──▶ copy
//!                  (download,     │
//!                   extract)      └── removed on every exit path
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod installer;
pub mod loader;
pub mod requirements;
pub mod source;
pub mod staging;

pub use archive::{extract_archive, SUPPORTED_SUFFIXES};
pub use cli::{execute, Command};
pub use error::{InstallError, Result};
pub use installer::{InstallOptions, InstallResult, Installer};
pub use loader::{list_primitive_files, load_primitive_from_file};
pub use requirements::{install_requirements, REQUIREMENTS_FILE};
pub use source::InstallSource;
pub use staging::StagingDir;
