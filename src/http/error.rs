use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("not logged in")]
    MissingSession,
}
