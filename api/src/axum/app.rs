use axum::Router;
use std::env;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::http::routes;

const REQUIRED_ENV_VARS: &[&str] = &["OPENAI_API_KEY", "PINECONE_API_KEY", "PINECONE_INDEX_HOST"];

pub fn create() -> Router {
    for var in REQUIRED_ENV_VARS {
        assert!(env::var(var).is_ok(), "${var} not set");
    }

    Router::new()
        .merge(routes::mount())
        .layer(
            CorsLayer::permissive()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_headers(AllowHeaders::mirror_request()),
        )
        .layer(TraceLayer::new_for_http())
}
