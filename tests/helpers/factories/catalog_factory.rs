use crate::catalog::{Catalog, CatalogError, Liquid, LiquidClass};
use crate::test_helpers::factories::{LiquidClassFactory, LiquidFactory};

/// Builds small catalogs for tests that should not depend on the built-in data.
pub struct CatalogFactory {
    liquids: Vec<Liquid>,
    classes: Vec<LiquidClass>,
}

impl CatalogFactory {
    /// Two classes ("Aqueous", "Viscous") and three liquids.
    pub fn new() -> Self {
        Self {
            classes: vec![
                LiquidClassFactory::new().with_name("Aqueous").create(),
                LiquidClassFactory::new()
                    .with_name("Viscous")
                    .with_description("For highly viscous liquids")
                    .create(),
            ],
            liquids: vec![
                LiquidFactory::new().with_name("Water").with_class("Aqueous").create(),
                LiquidFactory::new()
                    .with_name("Glycerol")
                    .with_class("Viscous")
                    .with_viscosity(934.0)
                    .create(),
                LiquidFactory::new()
                    .with_name("Buffer")
                    .with_class("Aqueous")
                    .as_solution()
                    .create(),
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            liquids: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn with_liquid(mut self, liquid: Liquid) -> Self {
        self.liquids.push(liquid);
        self
    }

    pub fn with_class(mut self, class: LiquidClass) -> Self {
        self.classes.push(class);
        self
    }

    pub fn try_create(self) -> Result<Catalog, CatalogError> {
        Catalog::from_parts(self.liquids, self.classes)
    }

    pub fn create(self) -> Catalog {
        self.try_create().expect("factory catalog should be valid")
    }
}
