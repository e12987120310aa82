use super::repository;
use crate::types::Context;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::json;
use std::sync::Arc;

async fn get_reviews(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match repository::find_all(&ctx.db_conn.pool).await {
        Ok(reviews) => (StatusCode::OK, Json(json!(reviews))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch reviews" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/", get(get_reviews))
}
