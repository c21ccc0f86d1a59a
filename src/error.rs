use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a readable xlsx workbook", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("Worksheet {sheet:?} does not exist in {} (found: {})", .path.display(), .available.join(", "))]
    MissingSheet {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Could not find {0}")]
    UserNotFound(String),

    #[error("Clipboard unavailable")]
    Clipboard(#[from] arboard::Error),
}
