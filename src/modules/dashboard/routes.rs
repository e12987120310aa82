use super::repository;
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde_json::json;
use std::sync::Arc;

async fn get_admin_stats(State(ctx): State<Arc<Context>>, _: AdminAuth) -> impl IntoResponse {
    match repository::get_admin_stats(&ctx.db_conn.pool).await {
        Ok(stats) => (StatusCode::OK, Json(json!(stats))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch stats" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/admin-stats", get(get_admin_stats))
}
