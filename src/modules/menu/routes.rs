use super::repository;
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

async fn get_menu(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match repository::find_all(&ctx.db_conn.pool).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch menu" })),
        ),
    }
}

#[derive(Deserialize, Validate)]
struct CreateMenuItemPayload {
    #[validate(length(min = 1))]
    name: String,
    recipe: String,
    image: String,
    #[validate(length(min = 1))]
    category: String,
    price: BigDecimal,
}

async fn create_menu_item(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    Json(payload): Json<CreateMenuItemPayload>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })));
    }

    match repository::create(
        &ctx.db_conn.pool,
        repository::CreateMenuItemPayload {
            name: payload.name,
            recipe: payload.recipe,
            image: payload.image,
            category: payload.category,
            price: payload.price,
        },
    )
    .await
    {
        Ok(item) => (StatusCode::CREATED, Json(json!(item))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to create menu item" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/", get(get_menu).post(create_menu_item))
}
