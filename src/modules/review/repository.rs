use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub details: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Review>> {
    sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching reviews: {}", err);
            Error::UnexpectedError
        })
}
