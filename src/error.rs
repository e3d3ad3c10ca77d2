use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("repository access error: {0}")]
    RepositoryAccess(String),
    #[error("language model unavailable: {0}")]
    BackendUnavailable(String),
    #[error("language model returned an invalid response: {0}")]
    InvalidResponse(String),
    #[error("Error creating markdown file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
