use glint_env::PlatformError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a loader from being built.
///
/// Missing functions and extensions are not errors; they show up as
/// `Resolution::Unavailable` and `false`.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("invalid loader settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("failed to read loader settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
