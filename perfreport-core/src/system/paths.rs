use crate::config::{load_config, Config};
use crate::ReportResult;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "PERFREPORT_CONFIG";

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "PERFREPORT_LOG";

/// Config file picked up from the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "perfreport.toml";

/// Locate the config file to use.
/// Checks the explicit path, then PERFREPORT_CONFIG, then ./perfreport.toml
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_config_path_from(explicit, std::env::var_os(CONFIG_ENV), &cwd)
}

/// Same as [`resolve_config_path`] with the environment passed in
pub fn resolve_config_path_from(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    cwd: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value));
    }

    let local = cwd.join(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}

/// Load the config that applies to this run, or defaults when no file is found.
/// Returns the path it was read from alongside it.
pub fn load_effective_config(explicit: Option<&Path>) -> ReportResult<(Config, Option<PathBuf>)> {
    match resolve_config_path(explicit) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}
