use crate::catalog::{LiquidClass, Parameter, ParameterSettings};
use crate::test_helpers::factories::ParameterSettingsFactory;

pub struct LiquidClassFactory {
    name: String,
    description: String,
    aspirate_speed: ParameterSettings,
    dispense_speed: ParameterSettings,
    air_gap: ParameterSettings,
    blowout: ParameterSettings,
    z_offset: ParameterSettings,
    tips: ParameterSettings,
}

impl LiquidClassFactory {
    pub fn new() -> Self {
        let standard = ParameterSettingsFactory::new().create();
        Self {
            name: "Aqueous".to_string(),
            description: "For water and water-like solutions".to_string(),
            aspirate_speed: standard.clone(),
            dispense_speed: standard.clone(),
            air_gap: standard.clone(),
            blowout: standard.clone(),
            z_offset: standard.clone(),
            tips: standard,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter, settings: ParameterSettings) -> Self {
        let slot = match parameter {
            Parameter::AspirateSpeed => &mut self.aspirate_speed,
            Parameter::DispenseSpeed => &mut self.dispense_speed,
            Parameter::AirGap => &mut self.air_gap,
            Parameter::Blowout => &mut self.blowout,
            Parameter::ZOffset => &mut self.z_offset,
            Parameter::Tips => &mut self.tips,
        };
        *slot = settings;
        self
    }

    pub fn create(self) -> LiquidClass {
        LiquidClass {
            name: self.name,
            description: self.description,
            aspirate_speed: self.aspirate_speed,
            dispense_speed: self.dispense_speed,
            air_gap: self.air_gap,
            blowout: self.blowout,
            z_offset: self.z_offset,
            tips: self.tips,
        }
    }
}
