use super::repository;
use crate::types::Context;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Router,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

#[derive(Deserialize)]
struct ListCartItemsQuery {
    email: String,
}

async fn get_cart_items(
    State(ctx): State<Arc<Context>>,
    Query(query): Query<ListCartItemsQuery>,
) -> impl IntoResponse {
    match repository::find_many_by_email(&ctx.db_conn.pool, query.email).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch cart items" })),
        ),
    }
}

#[derive(Deserialize, Validate)]
struct AddCartItemPayload {
    #[validate(length(min = 1))]
    menu_item_id: String,
    #[validate(email)]
    email: String,
    name: String,
    image: String,
    price: BigDecimal,
}

async fn add_cart_item(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<AddCartItemPayload>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })));
    }

    match repository::create(
        &ctx.db_conn.pool,
        repository::CreateCartItemPayload {
            menu_item_id: payload.menu_item_id,
            email: payload.email,
            name: payload.name,
            image: payload.image,
            price: payload.price,
        },
    )
    .await
    {
        Ok(item) => (StatusCode::CREATED, Json(json!(item))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to add item to cart" })),
        ),
    }
}

async fn remove_cart_item(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match repository::delete_by_id(&ctx.db_conn.pool, id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Cart item not found" })),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Cart item removed successfully" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to remove cart item" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(get_cart_items).post(add_cart_item))
        .route("/:id", delete(remove_cart_item))
}
