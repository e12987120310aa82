use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Payment {
    pub id: String,
    pub email: String,
    pub price: BigDecimal,
    pub transaction_id: Option<String>,
    pub status: Option<String>,
    pub cart_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
    pub created_at: NaiveDateTime,
}

pub struct CreatePaymentPayload {
    pub email: String,
    pub price: BigDecimal,
    pub transaction_id: Option<String>,
    pub status: Option<String>,
    pub cart_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreatePaymentPayload) -> Result<Payment> {
    sqlx::query_as::<_, Payment>(
        "
        INSERT INTO payments (id, email, price, transaction_id, status, cart_ids, menu_item_ids)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email)
    .bind(payload.price)
    .bind(payload.transaction_id)
    .bind(payload.status)
    .bind(payload.cart_ids)
    .bind(payload.menu_item_ids)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while recording a payment: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_by_email<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
) -> Result<Vec<Payment>> {
    sqlx::query_as::<_, Payment>(
        "SELECT * FROM payments WHERE email = $1 ORDER BY created_at DESC",
    )
    .bind(email)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching payments: {}", err);
        Error::UnexpectedError
    })
}
