//! Built-in computation functions a primitive definition can bind to.
//!
//! Definition files declare primitives by name; the declaration only
//! qualifies when its `function` resolves to one of the functions here for
//! the declared kind.

use serde::{Deserialize, Serialize};

use super::PrimitiveKind;

/// Aggregation functions: reduce a column of values to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationFunction {
    Max,
    Mean,
    Min,
    Sum,
    Count,
    Std,
}

impl AggregationFunction {
    /// Resolve a function name from a definition file.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "max" => Some(Self::Max),
            "mean" => Some(Self::Mean),
            "min" => Some(Self::Min),
            "sum" => Some(Self::Sum),
            "count" => Some(Self::Count),
            "std" => Some(Self::Std),
            _ => None,
        }
    }

    /// Apply the aggregation to a column of values.
    ///
    /// Returns `None` for an empty column, except `count` which returns 0.
    pub fn apply(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return match self {
                Self::Count => Some(0.0),
                _ => None,
            };
        }
        match self {
            Self::Max => values.iter().copied().reduce(f64::max),
            Self::Min => values.iter().copied().reduce(f64::min),
            Self::Sum => Some(values.iter().sum()),
            Self::Count => Some(values.len() as f64),
            Self::Mean => Some(values.iter().sum::<f64>() / values.len() as f64),
            Self::Std => {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                    / values.len() as f64;
                Some(variance.sqrt())
            }
        }
    }
}

/// Transform functions: map each value of a column to a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformFunction {
    Absolute,
    Negate,
    Square,
}

impl TransformFunction {
    /// Resolve a function name from a definition file.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "absolute" => Some(Self::Absolute),
            "negate" => Some(Self::Negate),
            "square" => Some(Self::Square),
            _ => None,
        }
    }

    /// Apply the transform to a single value.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Absolute => value.abs(),
            Self::Negate => -value,
            Self::Square => value * value,
        }
    }
}

/// A resolved built-in function of either kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveFunction {
    Aggregation(AggregationFunction),
    Transform(TransformFunction),
}

impl PrimitiveFunction {
    /// Resolve a `(kind, function)` pair from a definition file.
    ///
    /// Returns `None` when the name is not a recognized function of the
    /// declared kind.
    pub fn resolve(kind: PrimitiveKind, name: &str) -> Option<Self> {
        match kind {
            PrimitiveKind::Aggregation => {
                AggregationFunction::parse(name).map(Self::Aggregation)
            }
            PrimitiveKind::Transform => TransformFunction::parse(name).map(Self::Transform),
        }
    }
}
