use std::collections::HashSet;

use tracing::info;

use crate::catalog::definitions;
use crate::catalog::errors::CatalogError;
use crate::catalog::types::{Liquid, LiquidClass};

/// Immutable snapshot of every liquid and liquid class.
///
/// Built once, validated on construction, and only handed out by reference
/// afterwards. There is no way to add, change or remove records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    liquids: Vec<Liquid>,
    classes: Vec<LiquidClass>,
}

impl Catalog {
    /// Builds the catalog from the built-in definitions.
    pub fn initialize() -> Result<Self, CatalogError> {
        let catalog = Self::from_parts(definitions::liquids(), definitions::liquid_classes())?;
        info!(
            liquids = catalog.liquids.len(),
            classes = catalog.classes.len(),
            "Catalog initialized"
        );
        Ok(catalog)
    }

    pub fn from_parts(
        liquids: Vec<Liquid>,
        classes: Vec<LiquidClass>,
    ) -> Result<Self, CatalogError> {
        validate(&liquids, &classes)?;
        Ok(Self { liquids, classes })
    }

    pub fn liquids(&self) -> &[Liquid] {
        &self.liquids
    }

    pub fn liquid_classes(&self) -> &[LiquidClass] {
        &self.classes
    }
}

fn validate(liquids: &[Liquid], classes: &[LiquidClass]) -> Result<(), CatalogError> {
    let mut class_names = HashSet::with_capacity(classes.len());
    for class in classes {
        if !class_names.insert(class.name.as_str()) {
            return Err(CatalogError::DuplicateClass(class.name.clone()));
        }
        for (parameter, settings) in class.parameters() {
            if !settings.is_complete() {
                return Err(CatalogError::EmptySetting {
                    class: class.name.clone(),
                    parameter,
                });
            }
        }
    }

    let mut liquid_names = HashSet::with_capacity(liquids.len());
    for liquid in liquids {
        if !liquid_names.insert(liquid.name.as_str()) {
            return Err(CatalogError::DuplicateLiquid(liquid.name.clone()));
        }
        if liquid.density.is_nan() || liquid.density <= 0.0 {
            return Err(CatalogError::NonPositiveProperty {
                liquid: liquid.name.clone(),
                property: "density",
            });
        }
        if liquid.viscosity.is_nan() || liquid.viscosity <= 0.0 {
            return Err(CatalogError::NonPositiveProperty {
                liquid: liquid.name.clone(),
                property: "viscosity",
            });
        }
        if !class_names.contains(liquid.liquid_class.as_str()) {
            return Err(CatalogError::UnknownLiquidClass {
                liquid: liquid.name.clone(),
                class: liquid.liquid_class.clone(),
            });
        }
    }

    Ok(())
}
