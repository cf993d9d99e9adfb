use std::fmt;

/// A laboratory liquid and the physical properties that matter for pipetting.
#[derive(Debug, Clone, PartialEq)]
pub struct Liquid {
    pub name: String,
    /// Relative density (g/mL).
    pub density: f64,
    /// Relative viscosity (cP).
    pub viscosity: f64,
    /// Molar mass as a decimal string; `None` for mixtures and solutions.
    pub molar_weight: Option<String>,
    /// Name of the `LiquidClass` this liquid is handled with.
    pub liquid_class: String,
    pub notes: String,
}

/// Recommended configuration for one dispensing parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSettings {
    pub label: String,
    pub value: String,
    /// Multi-line instrument settings, one `Key: value` pair per line.
    pub device_settings: String,
}

impl ParameterSettings {
    pub fn is_complete(&self) -> bool {
        !self.label.trim().is_empty()
            && !self.value.trim().is_empty()
            && !self.device_settings.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidClass {
    pub name: String,
    pub description: String,
    pub aspirate_speed: ParameterSettings,
    pub dispense_speed: ParameterSettings,
    pub air_gap: ParameterSettings,
    pub blowout: ParameterSettings,
    pub z_offset: ParameterSettings,
    pub tips: ParameterSettings,
}

impl LiquidClass {
    pub fn parameter(&self, parameter: Parameter) -> &ParameterSettings {
        match parameter {
            Parameter::AspirateSpeed => &self.aspirate_speed,
            Parameter::DispenseSpeed => &self.dispense_speed,
            Parameter::AirGap => &self.air_gap,
            Parameter::Blowout => &self.blowout,
            Parameter::ZOffset => &self.z_offset,
            Parameter::Tips => &self.tips,
        }
    }

    /// All six parameters in display order.
    pub fn parameters(&self) -> impl Iterator<Item = (Parameter, &ParameterSettings)> {
        Parameter::ALL.iter().map(move |p| (*p, self.parameter(*p)))
    }
}

/// The six tunable parameters every liquid class carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    AspirateSpeed,
    DispenseSpeed,
    AirGap,
    Blowout,
    ZOffset,
    Tips,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::AspirateSpeed,
        Parameter::DispenseSpeed,
        Parameter::AirGap,
        Parameter::Blowout,
        Parameter::ZOffset,
        Parameter::Tips,
    ];

    /// Key used on the wire and in the browser view.
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::AspirateSpeed => "p_speed",
            Parameter::DispenseSpeed => "d_speed",
            Parameter::AirGap => "air_gap",
            Parameter::Blowout => "blowout",
            Parameter::ZOffset => "z_offset",
            Parameter::Tips => "tips",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Parameter::AspirateSpeed => "Pipetting Speed",
            Parameter::DispenseSpeed => "Dispensing Speed",
            Parameter::AirGap => "Air Gap",
            Parameter::Blowout => "Blowout",
            Parameter::ZOffset => "Z-Offset",
            Parameter::Tips => "Recommended Tips",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
