use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use menu_assistant::AssistantError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("session not found")]
    SessionNotFound,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Assistant(err) => match err {
                AssistantError::MissingCredential => StatusCode::UNAUTHORIZED,
                AssistantError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AssistantError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
                AssistantError::MenuNotLoaded => StatusCode::CONFLICT,
                AssistantError::EmptyQuestion => StatusCode::BAD_REQUEST,
                AssistantError::Completion(_) => StatusCode::BAD_GATEWAY,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Assistant(err) => match err {
                AssistantError::MissingCredential => "MISSING_CREDENTIAL",
                AssistantError::Parse(_) => "PARSE_ERROR",
                AssistantError::Io(_) => "IO_ERROR",
                AssistantError::MenuNotLoaded => "MENU_NOT_LOADED",
                AssistantError::EmptyQuestion => "EMPTY_QUESTION",
                AssistantError::Completion(_) => "COMPLETION_ERROR",
            },
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::SessionNotFound => "NOT_FOUND",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
