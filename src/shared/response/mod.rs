pub mod json;
pub mod render;
pub mod types;

pub use types::{Response, ResponseBody, StatusCode};

pub use json::{JsonRenderer, PrettyJsonRenderer};
pub use render::Renderer;
