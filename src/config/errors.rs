use std::path::PathBuf;

use thiserror::Error;

/// Errors that may occur while loading or saving the dashboard config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error("Config directory unavailable: {0}")]
    Dir(#[from] crate::app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`super::AppConfig`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}
