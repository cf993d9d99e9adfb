use crate::test_helpers::factories::LiquidFactory;

#[test]
fn builds_default_liquid() {
    let liquid = LiquidFactory::new().create();

    assert_eq!(liquid.name, "Water");
    assert_eq!(liquid.liquid_class, "Aqueous");
    assert_eq!(liquid.molar_weight.as_deref(), Some("18.02"));
}

#[test]
fn solution_has_no_molar_weight() {
    let liquid = LiquidFactory::new()
        .with_name("Serum")
        .with_class("Serum")
        .as_solution()
        .create();

    assert_eq!(liquid.molar_weight, None);
    assert_eq!(liquid.liquid_class, "Serum");
}

#[test]
fn overrides_physical_properties() {
    let liquid = LiquidFactory::new()
        .with_density(1.49)
        .with_viscosity(0.54)
        .with_molar_weight("119.38")
        .with_notes("High density")
        .create();

    assert_eq!(liquid.density, 1.49);
    assert_eq!(liquid.viscosity, 0.54);
    assert_eq!(liquid.molar_weight.as_deref(), Some("119.38"));
    assert_eq!(liquid.notes, "High density");
}
