//! Primitive definition files and their resolution against the capability
//! contract.
//!
//! A definition file is a TOML document with `[[primitive]]` entries. A
//! well-formed file declares exactly one primitive; the loader enforces
//! that. An entry qualifies when it deserializes and its `kind`/`function`
//! pair resolves to a recognized built-in function.

use serde::{Deserialize, Serialize};

use super::functions::PrimitiveFunction;
use super::{ColumnType, Primitive, PrimitiveKind};

/// A single primitive declaration from a definition file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrimitiveDefinition {
    /// Unique name of the primitive.
    pub name: String,

    /// The kind of primitive.
    pub kind: PrimitiveKind,

    /// Name of the built-in function this primitive binds to.
    pub function: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Column types this primitive accepts.
    #[serde(default = "default_input_types")]
    pub input_types: Vec<ColumnType>,

    /// Column type this primitive produces.
    #[serde(default = "default_return_type")]
    pub return_type: ColumnType,
}

fn default_input_types() -> Vec<ColumnType> {
    vec![ColumnType::Numeric]
}

const fn default_return_type() -> ColumnType {
    ColumnType::Numeric
}

/// A definition resolved against the capability contract.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoadedPrimitive {
    definition: PrimitiveDefinition,
    function: PrimitiveFunction,
}

impl LoadedPrimitive {
    /// Resolve a definition into a loaded primitive.
    ///
    /// Returns `None` when the declared function is not a recognized
    /// built-in of the declared kind - the definition does not qualify.
    pub fn resolve(definition: PrimitiveDefinition) -> Option<Self> {
        let function = PrimitiveFunction::resolve(definition.kind, &definition.function)?;
        Some(Self {
            definition,
            function,
        })
    }

    /// The resolved built-in function.
    pub fn function(&self) -> PrimitiveFunction {
        self.function
    }

    /// The underlying definition.
    pub fn definition(&self) -> &PrimitiveDefinition {
        &self.definition
    }
}

impl Primitive for LoadedPrimitive {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn kind(&self) -> PrimitiveKind {
        self.definition.kind
    }

    fn description(&self) -> &str {
        &self.definition.description
    }

    fn input_types(&self) -> &[ColumnType] {
        &self.definition.input_types
    }

    fn return_type(&self) -> ColumnType {
        self.definition.return_type
    }
}
