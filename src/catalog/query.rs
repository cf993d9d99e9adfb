use tracing::debug;

use crate::catalog::errors::CatalogError;
use crate::catalog::store::Catalog;
use crate::catalog::types::{Liquid, LiquidClass};

/// Read-only questions the boundary layers can ask about the catalog.
///
/// Every method is a pure scan over the owned `Catalog`; results borrow from
/// it and repeated calls return identical results.
#[derive(Debug, Clone)]
pub struct QueryService {
    catalog: Catalog,
}

impl QueryService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Class names in definition order.
    pub fn list_liquid_class_names(&self) -> Vec<&str> {
        self.catalog
            .liquid_classes()
            .iter()
            .map(|class| class.name.as_str())
            .collect()
    }

    /// Liquids handled with `class_filter`, or every liquid when the filter is
    /// absent or empty. An unknown class yields an empty list.
    pub fn find_liquids(&self, class_filter: Option<&str>) -> Vec<&Liquid> {
        match class_filter.filter(|f| !f.is_empty()) {
            Some(class) => self
                .catalog
                .liquids()
                .iter()
                .filter(|liquid| liquid.liquid_class == class)
                .collect(),
            None => self.catalog.liquids().iter().collect(),
        }
    }

    pub fn find_liquid_class(&self, name: &str) -> Result<&LiquidClass, CatalogError> {
        self.catalog
            .liquid_classes()
            .iter()
            .find(|class| class.name == name)
            .ok_or_else(|| {
                debug!(target: "liquid_catalog::query", name, "Liquid class lookup missed");
                CatalogError::ClassNotFound(name.to_string())
            })
    }
}
