use std::path::PathBuf;

use thiserror::Error;

/// Run-terminating errors. Network and service failures never reach this type:
/// they are recovered where they happen (see `ProviderError`, `EnhanceError`, `PdfError`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load profile from {path}: {message}")]
    FileLoad { path: PathBuf, message: String },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),

    #[error("Input closed before the profile was complete")]
    InputClosed,
}

impl AppError {
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn file_load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        AppError::FileLoad {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
