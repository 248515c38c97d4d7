//! Primitive types and the capability contract for feature-engineering
//! primitives.
//!
//! A primitive is a user-defined feature-computation unit. Definition files
//! declare primitives; a declaration qualifies when it binds to one of the
//! recognized built-in functions for its kind.

pub mod definition;
pub mod functions;
pub mod registry;

pub use definition::{LoadedPrimitive, PrimitiveDefinition};
pub use functions::{AggregationFunction, PrimitiveFunction, TransformFunction};
pub use registry::PrimitiveRegistry;

use serde::{Deserialize, Serialize};

/// The kind of primitive (Aggregation or Transform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// An Aggregation reduces a column of values to a single value.
    Aggregation,
    /// A Transform maps each value of a column to a new value.
    Transform,
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aggregation => write!(f, "Aggregation"),
            Self::Transform => write!(f, "Transform"),
        }
    }
}

/// Column type accepted or produced by a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Categorical,
    Boolean,
    Datetime,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Categorical => write!(f, "categorical"),
            Self::Boolean => write!(f, "boolean"),
            Self::Datetime => write!(f, "datetime"),
        }
    }
}

/// Common interface for all primitives.
///
/// This is the capability contract a definition must satisfy to be
/// installable and loadable.
pub trait Primitive {
    /// Returns the unique name of this primitive.
    fn name(&self) -> &str;

    /// Returns the kind of this primitive.
    fn kind(&self) -> PrimitiveKind;

    /// Returns a human-readable description.
    fn description(&self) -> &str;

    /// Returns the column types this primitive accepts.
    fn input_types(&self) -> &[ColumnType];

    /// Returns the column type this primitive produces.
    fn return_type(&self) -> ColumnType;
}
