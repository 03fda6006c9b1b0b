mod error;
mod loader;
mod model;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config};
pub use model::*;
