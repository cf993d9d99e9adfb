//! Transfer representations. Every boundary (HTTP, CLI, browser page) maps
//! catalog records through these views, so the wire shape is defined once.

use serde::Serialize;

use crate::catalog::types::{Liquid, LiquidClass, ParameterSettings};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidView<'a> {
    pub name: &'a str,
    pub density: f64,
    pub viscosity: f64,
    /// `null` when the liquid has no single molar mass.
    pub molar_weight: Option<&'a str>,
    pub liquid_class: &'a str,
    pub notes: &'a str,
}

impl<'a> From<&'a Liquid> for LiquidView<'a> {
    fn from(liquid: &'a Liquid) -> Self {
        Self {
            name: &liquid.name,
            density: liquid.density,
            viscosity: liquid.viscosity,
            molar_weight: liquid.molar_weight.as_deref(),
            liquid_class: &liquid.liquid_class,
            notes: &liquid.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub venus_settings: &'a str,
}

impl<'a> From<&'a ParameterSettings> for ParameterView<'a> {
    fn from(settings: &'a ParameterSettings) -> Self {
        Self {
            label: &settings.label,
            value: &settings.value,
            venus_settings: &settings.device_settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidClassView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub p_speed: ParameterView<'a>,
    pub d_speed: ParameterView<'a>,
    pub air_gap: ParameterView<'a>,
    pub blowout: ParameterView<'a>,
    pub z_offset: ParameterView<'a>,
    pub tips: ParameterView<'a>,
}

impl<'a> From<&'a LiquidClass> for LiquidClassView<'a> {
    fn from(class: &'a LiquidClass) -> Self {
        Self {
            name: &class.name,
            description: &class.description,
            p_speed: (&class.aspirate_speed).into(),
            d_speed: (&class.dispense_speed).into(),
            air_gap: (&class.air_gap).into(),
            blowout: (&class.blowout).into(),
            z_offset: (&class.z_offset).into(),
            tips: (&class.tips).into(),
        }
    }
}

pub fn liquid_views<'a>(liquids: &[&'a Liquid]) -> Vec<LiquidView<'a>> {
    liquids.iter().map(|liquid| LiquidView::from(*liquid)).collect()
}
