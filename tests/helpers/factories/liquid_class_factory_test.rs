use crate::catalog::Parameter;
use crate::test_helpers::factories::{LiquidClassFactory, ParameterSettingsFactory};

#[test]
fn default_class_has_all_parameters_filled() {
    let class = LiquidClassFactory::new().create();

    assert_eq!(class.parameters().count(), 6);
    assert!(class.parameters().all(|(_, settings)| settings.is_complete()));
}

#[test]
fn with_parameter_replaces_only_that_slot() {
    let tips = ParameterSettingsFactory::new()
        .with_label("Wide Bore")
        .with_value("Wide Bore")
        .with_device_settings("Tip Type: Wide Bore")
        .create();
    let class = LiquidClassFactory::new()
        .with_parameter(Parameter::Tips, tips.clone())
        .create();

    assert_eq!(class.tips, tips);
    assert_eq!(class.aspirate_speed.label, "Standard");
}
