use axum::{body::StreamBody, http::header, response::IntoResponse};
use axum_jsonschema::Json;

use crate::axum::errors::{ApiError, ApiResult};
use advisor::Message;

/// Answers a student query over the professor review index, streaming the
/// reply as it is generated. Embedding or search failures abort the request
/// before any byte is sent; completion failures terminate the stream.
pub async fn create(Json(conversation): Json<Vec<Message>>) -> ApiResult<impl IntoResponse> {
    if conversation.is_empty() {
        return Err(ApiError::EmptyConversation);
    }

    let answer = advisor::answer(conversation).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        StreamBody::new(answer),
    ))
}
