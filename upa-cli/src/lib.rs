//! Shared plumbing for the UPA command-line tools: configuration loading and
//! log setup. Each binary stays a thin argument parser on top of this.

pub mod logging;

use std::path::Path;
use upa_config::{ConfigError, Loader, UpaConfig, LOCAL_CONFIG};

/// Build the effective configuration: embedded defaults, then `file` (or
/// `upa.toml` in `dir` if present), then whatever `overrides` applies on top.
pub fn load_config_in<F>(
    dir: &Path,
    file: Option<&str>,
    overrides: F,
) -> Result<UpaConfig, ConfigError>
where
    F: FnOnce(Loader) -> Result<Loader, ConfigError>,
{
    let loader = match file {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(dir.join(LOCAL_CONFIG)),
    };
    overrides(loader)?.build()
}

/// [`load_config_in`] relative to the working directory.
pub fn load_config<F>(file: Option<&str>, overrides: F) -> Result<UpaConfig, ConfigError>
where
    F: FnOnce(Loader) -> Result<Loader, ConfigError>,
{
    load_config_in(Path::new("."), file, overrides)
}

/// Load configuration or exit with status 1.
pub fn load_config_or_exit<F>(file: Option<&str>, overrides: F) -> UpaConfig
where
    F: FnOnce(Loader) -> Result<Loader, ConfigError>,
{
    load_config(file, overrides).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}
