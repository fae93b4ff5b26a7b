use axum::http::StatusCode;
use axum_derive_error::ErrorResponse;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, ErrorResponse)]
pub enum ApiError {
    #[error("Conversation must contain at least one message.")]
    #[status(StatusCode::BAD_REQUEST)]
    EmptyConversation,

    #[error(transparent)]
    ServerError(#[from] anyhow::Error),
}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string() && self.status_code() == other.status_code()
    }
}
