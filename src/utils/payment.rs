use crate::types::Context;
use bigdecimal::{BigDecimal, ToPrimitive};
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    InvalidPrice,
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Deserialize)]
pub struct PaymentIntent {
    pub client_secret: String,
}

/// Converts a decimal price into integer minor units (cents), truncating
/// any fraction of a cent.
pub fn to_minor_units(price: &BigDecimal) -> Option<i64> {
    (price * BigDecimal::from(100)).to_i64()
}

pub async fn create_payment_intent(ctx: Arc<Context>, price: BigDecimal) -> Result<PaymentIntent> {
    let amount = to_minor_units(&price).ok_or(Error::InvalidPrice)?;

    let res = reqwest::Client::new()
        .post(format!("{}/v1/payment_intents", ctx.payment.api_endpoint))
        .bearer_auth(ctx.payment.secret_key.clone())
        .form(&[
            ("amount", amount.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ])
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to create payment intent: {}", err);
            Error::UnexpectedError
        })?;

    if res.status() != StatusCode::OK {
        let data = res.text().await.map_err(|err| {
            tracing::error!("Failed to read payment intent error response: {:?}", err);
            Error::UnexpectedError
        })?;

        tracing::error!("Failed to create payment intent: {}", data);
        return Err(Error::UnexpectedError);
    }

    res.json::<PaymentIntent>().await.map_err(|err| {
        tracing::error!("Failed to parse payment intent response: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn converts_whole_prices_to_cents() {
        let price = BigDecimal::from(25);
        assert_eq!(to_minor_units(&price), Some(2500));
    }

    #[test]
    fn converts_fractional_prices_to_cents() {
        let price = BigDecimal::from_str("12.99").unwrap();
        assert_eq!(to_minor_units(&price), Some(1299));
    }

    #[test]
    fn truncates_fractions_of_a_cent() {
        let price = BigDecimal::from_str("10.999").unwrap();
        assert_eq!(to_minor_units(&price), Some(1099));
    }

    #[test]
    fn converts_zero() {
        let price = BigDecimal::from(0);
        assert_eq!(to_minor_units(&price), Some(0));
    }
}
