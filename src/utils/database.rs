use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub async fn connect(database_url: &str) -> DatabaseConnection {
    let pool = PgPoolOptions::new()
        .max_connections(8)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .unwrap_or_else(|err| {
            tracing::error!("{}", err);
            panic!("Could not open a connection pool to the database")
        });

    DatabaseConnection { pool }
}

pub async fn migrate(db_conn: DatabaseConnection) {
    if let Err(err) = sqlx::migrate!().run(&db_conn.pool).await {
        tracing::error!("{}", err);
        panic!("Failed to apply database migrations");
    }

    tracing::debug!("Database migrations are up to date");
}
