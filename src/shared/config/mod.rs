pub mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{LoggingConfig, ServerConfig, Settings, UiConfig, load_settings};
