use std::path::PathBuf;

/// Errors that can occur when loading configuration or constructing a game.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid board dimensions {rows}x{cols}: both must be at least {min}")]
    InvalidDimensions { rows: usize, cols: usize, min: usize },
}
