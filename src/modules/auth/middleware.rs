use super::service::{self, Claims};
use crate::modules::user;
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http, http::request::Parts, response::Response};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug)]
enum Error {
    InvalidToken,
}

fn get_token_from_header(header: &str) -> Result<String, Error> {
    header
        .split(' ')
        .nth(1)
        .map(|token| token.to_string())
        .ok_or(Error::InvalidToken)
}

async fn get_claims_from_request<State: Send + Sync>(
    ctx: Arc<Context>,
    parts: &mut Parts,
    _: &State,
) -> Result<Claims, Response> {
    let headers = parts.extract::<HeaderMap>().await.unwrap();

    let err = (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    );

    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(err.clone().into_response())?;

    let token =
        get_token_from_header(auth_header).map_err(|_| err.clone().into_response())?;

    service::verify_token(&ctx.auth.token_secret, &token)
        .map_err(|_| err.clone().into_response())
}

/// Extractor for any request carrying a valid bearer token. Carries only the
/// decoded claims, no database lookup.
#[derive(Serialize, Clone)]
pub struct Auth {
    pub claims: Claims,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts.extract::<Extension<Arc<Context>>>().await.unwrap();
        get_claims_from_request(ctx, parts, state)
            .await
            .map(|claims| Self { claims })
    }
}

/// Extractor for admin-only routes. Resolves the claimed email against the
/// user table and rejects with 403 unless the stored role is admin.
#[derive(Serialize, Clone)]
pub struct AdminAuth {
    pub claims: Claims,
    pub user: user::repository::User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts.extract::<Extension<Arc<Context>>>().await.unwrap();

        let claims = get_claims_from_request(ctx.clone(), parts, state).await?;

        let forbidden = (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Forbidden" })),
        );

        let user = user::repository::find_by_email(&ctx.db_conn.pool, claims.email.clone())
            .await
            .map_err(|_| forbidden.clone().into_response())?
            .ok_or(forbidden.clone().into_response())?;

        if !user::repository::is_admin(&user) {
            return Err(forbidden.into_response());
        }

        Ok(Self { claims, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_bearer_header() {
        let token = get_token_from_header("Bearer abc.def.ghi").unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn rejects_header_without_scheme() {
        assert!(get_token_from_header("abc.def.ghi").is_err());
    }

    #[test]
    fn rejects_empty_header() {
        assert!(get_token_from_header("").is_err());
    }
}
