pub use super::factories::{
    CatalogFactory, LiquidClassFactory, LiquidFactory, ParameterSettingsFactory,
};

pub struct Factory;

impl Factory {
    pub fn liquid() -> LiquidFactory {
        LiquidFactory::new()
    }

    pub fn liquid_class() -> LiquidClassFactory {
        LiquidClassFactory::new()
    }

    pub fn parameter_settings() -> ParameterSettingsFactory {
        ParameterSettingsFactory::new()
    }

    pub fn catalog() -> CatalogFactory {
        CatalogFactory::new()
    }
}
