pub mod definitions;
pub mod errors;
pub mod query;
pub mod store;
pub mod types;
pub mod view;

pub use errors::CatalogError;
pub use query::QueryService;
pub use store::Catalog;
pub use types::{Liquid, LiquidClass, Parameter, ParameterSettings};
pub use view::{LiquidClassView, LiquidView, ParameterView};

#[cfg(test)]
mod definitions_test;
