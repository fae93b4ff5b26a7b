use axum::{routing::post, Router};

use crate::http::controllers::ChatController;

pub fn mount() -> Router {
    Router::new().route("/chat", post(ChatController::create))
}
