use thiserror::Error;

#[derive(Error, Debug)]
pub enum PracticumError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the review API failed before a response was received
    /// (connection refused, timeout, DNS failure).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response body does not have the documented shape.
    #[error("Schema error: {0}")]
    Schema(String),
    /// A homework record is missing a required field or carries a status
    /// outside the recognized verdicts.
    #[error("Invalid homework record: {0}")]
    InvalidRecord(String),
}

pub type PracticumResult<T> = Result<T, PracticumError>;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The messaging API answered but refused to deliver the message.
    #[error("Message rejected: {0}")]
    Rejected(String),
}

pub type NotifyResult<T> = Result<T, NotifyError>;
