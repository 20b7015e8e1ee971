use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "SWIPEDECK_CONFIG_DIR";

const APP_DIR_NAME: &str = "swipedeck";

/// Get the config directory: `$SWIPEDECK_CONFIG_DIR`, else `<platform config dir>/swipedeck`
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("Could not determine a config directory (set SWIPEDECK_CONFIG_DIR)")
}
