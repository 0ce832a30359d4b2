//! Error types shared by the assistant pipeline.

use thiserror::Error;

/// Failures of a single call to the completion service.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Connection, TLS, or body decoding failed.
    #[error("request to completion service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status (bad key, quota, ...).
    #[error("completion service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A success response that carries no usable answer.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Errors surfaced to whoever drives a session.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Please enter your API key to continue.")]
    MissingCredential,

    #[error("menu is not a valid dish list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read menu file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please upload a menu before asking questions.")]
    MenuNotLoaded,

    #[error("question is empty")]
    EmptyQuestion,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

pub type AssistantResult<T> = Result<T, AssistantError>;
