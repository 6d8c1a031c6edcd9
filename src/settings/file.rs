//! Settings file loading.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::cli::prompts;
use crate::error::{Error, Result};

const ENV_PATH: &str = "PASSFORGE_CONFIG";

pub fn load(path: &Path) -> Result<Settings> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(Error::Config {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut settings: Settings = toml::from_str(&text).map_err(|source| Error::ConfigFormat {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded settings from {}", path.display());

    let length = settings.length;
    if settings.set_length(length) {
        prompts::length_clamped(length, settings.length);
    }
    if settings.set_count(settings.count) {
        prompts::count_raised();
    }
    Ok(settings)
}

pub fn resolve(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = env::var(ENV_PATH)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passforge/settings.toml", home))
}
