use aws_sdk_dynamodb::error::BoxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    MissingVariable(&'static str),
}

#[derive(Error, Debug)]
pub enum StoreError {
    /// `detail` is the rendered error chain of `source`.
    #[error("failed to {operation}: {detail}")]
    Backend {
        operation: &'static str,
        detail: String,
        #[source]
        source: BoxError,
    },
    #[error("stored item is missing string attribute '{0}'")]
    MissingAttribute(&'static str),
}

/// Failures surfaced by handler logic.
///
/// None of these are mapped to a response envelope: the function returns them
/// as invocation errors and the platform answers with its generic failure.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("missing query string parameter '{0}'")]
    MissingParameter(String),
    #[error("no record stored under name '{0}'")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}
