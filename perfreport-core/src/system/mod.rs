//! System-level utilities

pub mod paths;

pub use paths::{
    load_effective_config, resolve_config_path, resolve_config_path_from, CONFIG_ENV,
    DEFAULT_CONFIG_FILE, LOG_ENV,
};
