use std::io;
use std::path::PathBuf;

/// Front-end failures. The generator, scorer and validator never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read settings {}: {source}", path.display())]
    Config { path: PathBuf, source: io::Error },

    #[error("Invalid settings {}: {source}", path.display())]
    ConfigFormat {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Failed to read password: {0}")]
    Input(#[from] io::Error),

    #[error("Failed to read password: {0}")]
    Prompt(#[from] inquire::InquireError),
}

pub type Result<T> = std::result::Result<T, Error>;
