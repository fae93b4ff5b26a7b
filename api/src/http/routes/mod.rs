use axum::{routing::get, Json, Router};
use std::env;

mod chat;

pub fn mount() -> Router {
    Router::new()
        .merge(chat::mount())
        .route("/version", get(version))
        .route("/", get(|| async {}))
}

#[derive(serde::Serialize)]
struct AdvisorVersion {
    semver: String,
    rev: Option<String>,
}

#[allow(clippy::unused_async)]
async fn version() -> Json<AdvisorVersion> {
    Json(AdvisorVersion {
        rev: env::var("GIT_REV").ok(),
        semver: env!("CARGO_PKG_VERSION").to_string(),
    })
}
