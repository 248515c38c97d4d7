//! Featurekit - installation tooling for feature-engineering primitives.
//!
//! Featurekit takes user-authored primitive definition files - from a local
//! directory, a `.tar`/`.tar.gz` archive, or a remote URL - validates them,
//! installs any declared package dependencies, and copies them into a fixed
//! installation directory where they become loadable through the registry.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   Featurekit CLI                     │
//! │  ┌──────────┐  ┌──────────┐  ┌───────────────────┐  │
//! │  │ Install  │  │   List   │  │       Info        │  │
//! │  └──────────┘  └──────────┘  └───────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//!         │
//!         ▼
//!    ┌──────────────────────────────────────────┐
//!    │   Source (dir | archive | URL | s3://)   │
//!    └──────────────────────────────────────────┘
//!         │ download / extract into staging
//!         ▼
//!    ┌──────────────────────────────────────────┐
//!    │   Validate definitions, install deps     │
//!    └──────────────────────────────────────────┘
//!         │ copy
//!         ▼
//!    ┌──────────────────────────────────────────┐
//!    │   Installation dir  |  Data dir          │
//!    └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod install;
pub mod primitives;

pub use config::FeaturekitConfig;
pub use install::{InstallError, InstallOptions, InstallResult, Installer};
pub use primitives::{ColumnType, Primitive, PrimitiveKind, PrimitiveRegistry};
