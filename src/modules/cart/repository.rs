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

/// One menu item placed in a user's cart. Carts have no identity of their
/// own; ownership is the email on each item.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct CartItem {
    pub id: String,
    pub menu_item_id: String,
    pub email: String,
    pub name: String,
    pub image: String,
    pub price: BigDecimal,
    pub created_at: NaiveDateTime,
}

pub struct CreateCartItemPayload {
    pub menu_item_id: String,
    pub email: String,
    pub name: String,
    pub image: String,
    pub price: BigDecimal,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateCartItemPayload,
) -> Result<CartItem> {
    sqlx::query_as::<_, CartItem>(
        "
        INSERT INTO cart_items (id, menu_item_id, email, name, image, price)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.menu_item_id)
    .bind(payload.email)
    .bind(payload.name)
    .bind(payload.image)
    .bind(payload.price)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while adding an item to the cart: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_by_email<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
) -> Result<Vec<CartItem>> {
    sqlx::query_as::<_, CartItem>(
        "SELECT * FROM cart_items WHERE email = $1 ORDER BY created_at DESC",
    )
    .bind(email)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching cart items: {}", err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<u64> {
    sqlx::query("DELETE FROM cart_items WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting cart item {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn delete_many_by_ids<'e, E: PgExecutor<'e>>(e: E, ids: Vec<String>) -> Result<u64> {
    sqlx::query("DELETE FROM cart_items WHERE id = ANY($1)")
        .bind(ids)
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while purging cart items: {}", err);
            Error::UnexpectedError
        })
}
