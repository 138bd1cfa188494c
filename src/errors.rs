use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No usable token: missing, malformed, expired or failing verification.
    #[error("Authentication missing: {0}")]
    AuthenticationMissing(String),

    /// Token verified but carries no permission list.
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// Token verified but lacks the required scope.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Message placed in the response envelope. Auth failures expose their
    /// description; everything else uses a fixed text so storage details
    /// never reach the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(_) => "resource not found".to_string(),
            AppError::Unprocessable(_) => "unprocessable".to_string(),
            AppError::BadRequest(_) => "bad request".to_string(),
            AppError::MethodNotAllowed => "method not allowed".to_string(),
            AppError::AuthenticationMissing(description)
            | AppError::InvalidClaims(description)
            | AppError::Forbidden(description) => description.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "internal server error".to_string()
            }
        }
    }

    /// Collapses a failed storage write into the 422 the API reports for it.
    pub fn into_unprocessable(self) -> Self {
        match self {
            AppError::DatabaseError(detail) | AppError::InternalError(detail) => {
                AppError::Unprocessable(detail)
            }
            other => other,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::AuthenticationMissing(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidClaims(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.public_message(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
