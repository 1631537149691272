//! Configuration management for Annalist.
//!
//! This crate handles loading and validating the optional
//! `annalist.toml` configuration file. A missing file is not an error
//! at the CLI level; the defaults reproduce the stock behavior.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{ChangelogConfig, Config};
