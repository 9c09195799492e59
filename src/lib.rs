pub mod config;
pub mod core;
pub mod domain;
pub mod operations;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, RunConfig};
pub use core::{dispatcher::Dispatcher, registry::OperationRegistry};
pub use domain::model::{Action, Book, Command};
pub use utils::error::{DispatchError, Result};
