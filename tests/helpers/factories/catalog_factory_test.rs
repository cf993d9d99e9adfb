use crate::catalog::CatalogError;
use crate::test_helpers::factories::{CatalogFactory, LiquidFactory};

#[test]
fn default_catalog_is_valid() {
    let catalog = CatalogFactory::new().create();

    assert_eq!(catalog.liquid_classes().len(), 2);
    assert_eq!(catalog.liquids().len(), 3);
}

#[test]
fn try_create_surfaces_validation_errors() {
    let result = CatalogFactory::new()
        .with_liquid(LiquidFactory::new().with_name("Ghost").with_class("Missing").create())
        .try_create();

    assert!(matches!(
        result,
        Err(CatalogError::UnknownLiquidClass { .. })
    ));
}
