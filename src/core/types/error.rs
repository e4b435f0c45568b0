use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Fatal errors. Everything recoverable is logged where it occurs and the
/// pipeline carries on with what it has.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to update `{path}`: {source}")]
    DocumentUpdate {
        path: String,
        source: std::io::Error,
    },
}
