pub mod catalog_factory;
pub mod liquid_class_factory;
pub mod liquid_factory;
pub mod parameter_settings_factory;

pub use catalog_factory::CatalogFactory;
pub use liquid_class_factory::LiquidClassFactory;
pub use liquid_factory::LiquidFactory;
pub use parameter_settings_factory::ParameterSettingsFactory;

#[cfg(test)]
mod catalog_factory_test;
#[cfg(test)]
mod liquid_class_factory_test;
#[cfg(test)]
mod liquid_factory_test;
