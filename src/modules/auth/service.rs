use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const TOKEN_LIFETIME_DAYS: i64 = 365;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidToken,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    pub email: String,
    pub exp: usize,
}

pub fn issue_token(token_secret: &str, email: String) -> Result<String> {
    let expires_at = Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS);
    let claims = Claims {
        email,
        exp: expires_at.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(token_secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign access token: {}", err);
        Error::UnexpectedError
    })
}

pub fn verify_token(token_secret: &str, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(token_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| Error::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_verifies() {
        let token = issue_token(SECRET, "diner@example.com".to_string()).unwrap();
        let claims = verify_token(SECRET, &token).unwrap();

        assert_eq!(claims.email, "diner@example.com");
        assert!(claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue_token("other-secret", "diner@example.com".to_string()).unwrap();

        assert!(matches!(
            verify_token(SECRET, &token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify_token(SECRET, "not.a.token"),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims {
            email: "diner@example.com".to_string(),
            exp: (Utc::now() - Duration::days(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify_token(SECRET, &token),
            Err(Error::InvalidToken)
        ));
    }
}
