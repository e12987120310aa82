use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Serialize, Deserialize)]
pub struct AdminStats {
    pub users: i64,
    #[serde(rename = "menuItems")]
    pub menu_items: i64,
    pub orders: i64,
    pub revenue: BigDecimal,
}

#[derive(sqlx::FromRow)]
struct OptionalAdminStats {
    users: Option<i64>,
    menu_items: Option<i64>,
    orders: Option<i64>,
    revenue: Option<BigDecimal>,
}

/// Counts per collection plus the revenue sum, computed in the database
/// rather than by fetching every payment row.
pub async fn get_admin_stats<'e, E: PgExecutor<'e>>(e: E) -> Result<AdminStats> {
    sqlx::query_as::<_, OptionalAdminStats>(
        "
        SELECT
            (SELECT COUNT(id) FROM users) AS users,
            (SELECT COUNT(id) FROM menu_items) AS menu_items,
            (SELECT COUNT(id) FROM payments) AS orders,
            (SELECT COALESCE(SUM(price), 0) FROM payments) AS revenue
        ",
    )
    .fetch_one(e)
    .await
    .map(|res| AdminStats {
        users: res.users.unwrap_or(0),
        menu_items: res.menu_items.unwrap_or(0),
        orders: res.orders.unwrap_or(0),
        revenue: res.revenue.unwrap_or_default(),
    })
    .map_err(|err| {
        tracing::error!("Error occurred while computing admin stats: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::payment;
    use sqlx::postgres::PgPoolOptions;
    use std::str::FromStr;

    #[tokio::test]
    #[ignore = "requires a migrated database via DATABASE_URL"]
    async fn revenue_is_the_sum_of_recorded_payment_prices() {
        let pool = PgPoolOptions::new()
            .connect(&std::env::var("DATABASE_URL").unwrap())
            .await
            .unwrap();

        let before = get_admin_stats(&pool).await.unwrap();

        for price in ["12.99", "7.01", "30.00"] {
            payment::repository::create(
                &pool,
                payment::repository::CreatePaymentPayload {
                    email: "diner@example.com".to_string(),
                    price: BigDecimal::from_str(price).unwrap(),
                    transaction_id: None,
                    status: Some("pending".to_string()),
                    cart_ids: vec![],
                    menu_item_ids: vec![],
                },
            )
            .await
            .unwrap();
        }

        let after = get_admin_stats(&pool).await.unwrap();

        assert_eq!(after.orders, before.orders + 3);
        assert_eq!(
            after.revenue - before.revenue,
            BigDecimal::from_str("50.00").unwrap()
        );
    }
}
