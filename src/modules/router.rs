use super::{auth, cart, dashboard, menu, payment, review, user};
use crate::types::Context;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

async fn index() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": "Bistro backend is running" })))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(index))
        .merge(auth::get_router())
        .nest("/users", user::get_router())
        .nest("/menu", menu::get_router())
        .nest("/reviews", review::get_router())
        .nest("/carts", cart::get_router())
        .merge(payment::get_router())
        .merge(dashboard::get_router())
}
