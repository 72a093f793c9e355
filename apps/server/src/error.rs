use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use budgetify_core::errors::{DatabaseError, Error as CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Core(CoreError::Validation(err))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Core(CoreError::Database(DatabaseError::NotFound(_))) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message for the JSON endpoints.
    pub fn json_message(&self) -> String {
        match self {
            ApiError::Core(CoreError::Validation(ValidationError::MissingField(_))) => {
                "Missing fields".to_string()
            }
            ApiError::Core(CoreError::Validation(ValidationError::InvalidAmount(_))) => {
                "Invalid amount".to_string()
            }
            _ => self.shared_message(),
        }
    }

    /// Message for the form and page endpoints, sent as plain text.
    pub fn text_message(&self) -> String {
        match self {
            ApiError::Core(CoreError::Validation(ValidationError::MissingField(_))) => {
                "Invalid input".to_string()
            }
            ApiError::Core(CoreError::Validation(ValidationError::InvalidAmount(_))) => {
                "Amount must be a number".to_string()
            }
            _ => self.shared_message(),
        }
    }

    fn shared_message(&self) -> String {
        match self.status() {
            StatusCode::NOT_FOUND => "Not found".to_string(),
            _ => match self {
                ApiError::Core(CoreError::Database(_)) => "DB error".to_string(),
                _ => "Internal error".to_string(),
            },
        }
    }

    fn log(&self) {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let body = Json(ErrorBody {
            ok: false,
            error: self.json_message(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error for HTML routes: same classification as [`ApiError`], plain-text body.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct PageError(#[from] pub ApiError);

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        PageError(ApiError::Core(err))
    }
}

impl From<ValidationError> for PageError {
    fn from(err: ValidationError) -> Self {
        PageError(err.into())
    }
}

impl From<tera::Error> for PageError {
    fn from(err: tera::Error) -> Self {
        PageError(ApiError::Template(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0.log();
        (self.0.status(), self.0.text_message()).into_response()
    }
}

pub type PageResult<T> = Result<T, PageError>;
