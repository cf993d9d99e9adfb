use crate::catalog::definitions::{liquid_classes, liquids};
use crate::catalog::store::Catalog;

#[test]
fn builtin_definitions_form_a_valid_catalog() {
    let catalog = Catalog::from_parts(liquids(), liquid_classes());
    assert!(catalog.is_ok(), "built-in catalog invalid: {:?}", catalog.err());
}

#[test]
fn builtin_definitions_have_expected_sizes() {
    assert_eq!(liquids().len(), 20);
    assert_eq!(liquid_classes().len(), 11);
}

#[test]
fn every_builtin_liquid_references_a_defined_class() {
    let classes = liquid_classes();
    for liquid in liquids() {
        assert!(
            classes.iter().any(|c| c.name == liquid.liquid_class),
            "{} references missing class {}",
            liquid.name,
            liquid.liquid_class
        );
    }
}

#[test]
fn solutions_have_no_molar_weight() {
    let solutions: Vec<String> = liquids()
        .into_iter()
        .filter(|l| l.molar_weight.is_none())
        .map(|l| l.name)
        .collect();

    assert_eq!(
        solutions,
        vec![
            "10% Glycerol Solution",
            "50% Glycerol Solution",
            "Serum",
            "Phosphate Buffered Saline",
            "70% Ethanol",
        ]
    );
}

#[test]
fn device_settings_are_multi_line() {
    for class in liquid_classes() {
        for (parameter, settings) in class.parameters() {
            assert!(
                settings.device_settings.lines().count() >= 3,
                "{} {} has too few settings lines",
                class.name,
                parameter
            );
        }
    }
}

#[test]
fn definitions_are_deterministic() {
    assert_eq!(liquids(), liquids());
    assert_eq!(liquid_classes(), liquid_classes());
}
