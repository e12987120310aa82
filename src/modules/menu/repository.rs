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
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: BigDecimal,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateMenuItemPayload {
    pub name: String,
    pub recipe: String,
    pub image: String,
    pub category: String,
    pub price: BigDecimal,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateMenuItemPayload,
) -> Result<MenuItem> {
    sqlx::query_as::<_, MenuItem>(
        "
        INSERT INTO menu_items (id, name, recipe, image, category, price)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.recipe)
    .bind(payload.image)
    .bind(payload.category)
    .bind(payload.price)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a menu item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<MenuItem>> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY created_at DESC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching menu items: {}", err);
            Error::UnexpectedError
        })
}
