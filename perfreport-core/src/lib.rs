//! Core utilities and types shared across the perfreport crates

pub mod config;
pub mod error;
pub mod system;

// Re-export commonly used types
pub use config::{load_config, save_config, Config, OutputFormat, TableStyle};
pub use error::{ErrorKind, ReportError, ReportResult};

// Re-export system utilities
pub use system::{load_effective_config, resolve_config_path, CONFIG_ENV, DEFAULT_CONFIG_FILE, LOG_ENV};
