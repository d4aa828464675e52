//! User settings and their persistence
//!
//! Settings are stored one field per storage key as postcard binary data.

pub mod settings;
pub mod store;

pub use settings::*;
pub use store::{ConfigError, ConfigStore};
