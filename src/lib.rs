pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod suites;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, settings::Settings, toml_config::SmokeConfig};
pub use crate::core::{client::ApiClient, results::ResultLog, runner::SmokeRunner};
pub use utils::error::{Result, SmokeError};
