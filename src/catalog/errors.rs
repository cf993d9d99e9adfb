use thiserror::Error;

use crate::catalog::types::Parameter;

/// Errors raised by catalog construction and lookup.
///
/// `ClassNotFound` is the only variant a query can produce. The rest describe
/// malformed definitions and are rejected when the catalog is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Liquid class not found: {0}")]
    ClassNotFound(String),

    #[error("Liquid '{liquid}' references unknown liquid class '{class}'")]
    UnknownLiquidClass { liquid: String, class: String },

    #[error("Duplicate liquid name: {0}")]
    DuplicateLiquid(String),

    #[error("Duplicate liquid class name: {0}")]
    DuplicateClass(String),

    #[error("Liquid class '{class}' has an empty '{parameter}' setting")]
    EmptySetting { class: String, parameter: Parameter },

    #[error("Liquid '{liquid}' has a non-positive {property}")]
    NonPositiveProperty {
        liquid: String,
        property: &'static str,
    },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ClassNotFound(_))
    }
}
