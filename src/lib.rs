pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::chain::FlyoverChain;
pub use crate::domain::model::{Coordinates, PassRecord};
pub use crate::utils::error::{FlyoverError, Result};
