use super::repository;
use crate::{
    modules::{auth::middleware::Auth, cart},
    types::Context,
    utils::payment,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

#[derive(Deserialize)]
struct CreatePaymentIntentPayload {
    price: BigDecimal,
}

async fn create_payment_intent(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<CreatePaymentIntentPayload>,
) -> impl IntoResponse {
    match payment::create_payment_intent(ctx.clone(), payload.price).await {
        Ok(intent) => (
            StatusCode::OK,
            Json(json!({ "clientSecret": intent.client_secret })),
        ),
        Err(payment::Error::InvalidPrice) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid price" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to create payment intent" })),
        ),
    }
}

async fn get_payments_by_email(
    State(ctx): State<Arc<Context>>,
    Path(email): Path<String>,
    auth: Auth,
) -> impl IntoResponse {
    if email != auth.claims.email {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Forbidden" })),
        );
    }

    match repository::find_many_by_email(&ctx.db_conn.pool, email).await {
        Ok(payments) => (StatusCode::OK, Json(json!(payments))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch payments" })),
        ),
    }
}

#[derive(Deserialize, Validate)]
struct RecordPaymentPayload {
    #[validate(email)]
    email: String,
    price: BigDecimal,
    transaction_id: Option<String>,
    status: Option<String>,
    #[serde(default)]
    cart_ids: Vec<String>,
    #[serde(default)]
    menu_item_ids: Vec<String>,
}

async fn record_payment(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<RecordPaymentPayload>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })));
    }

    let cart_ids = payload.cart_ids.clone();

    let payment = match repository::create(
        &ctx.db_conn.pool,
        repository::CreatePaymentPayload {
            email: payload.email,
            price: payload.price,
            transaction_id: payload.transaction_id,
            status: payload.status,
            cart_ids: payload.cart_ids,
            menu_item_ids: payload.menu_item_ids,
        },
    )
    .await
    {
        Ok(payment) => payment,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to record payment" })),
            )
        }
    };

    // Purge the paid-for cart items. This is a follow-up write, not part of
    // a transaction; a failure here leaves the payment recorded and the cart
    // items in place.
    match cart::repository::delete_many_by_ids(&ctx.db_conn.pool, cart_ids).await {
        Ok(deleted) => (
            StatusCode::CREATED,
            Json(json!({ "payment": payment, "deleted_cart_items": deleted })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Payment recorded but cart cleanup failed" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/payments", post(record_payment))
        .route("/payments/:email", get(get_payments_by_email))
}
