use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Invalid item ID";
pub const NOT_FOUND_MESSAGE: &str = "Item not found";

#[derive(Debug, Error)]
pub enum ItemError {
    /// One entry per violated rule
    #[error("Invalid input: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Path id is not an integer")]
    InvalidId,

    #[error("Item not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(details) => AppError::validation(details),
            ItemError::InvalidId => AppError::BadRequest(INVALID_ID_MESSAGE.to_string()),
            ItemError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            ItemError::Database(e) => AppError::Database(e),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
