use super::service;
use crate::types::Context;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

#[derive(Deserialize, Validate)]
struct IssueTokenPayload {
    #[validate(email)]
    email: String,
}

async fn issue_token(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<IssueTokenPayload>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })));
    }

    match service::issue_token(&ctx.auth.token_secret, payload.email) {
        Ok(token) => (StatusCode::OK, Json(json!({ "token": token }))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to issue token" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/jwt", post(issue_token))
}
