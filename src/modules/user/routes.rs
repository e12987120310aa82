use super::repository;
use crate::{
    modules::auth::middleware::{AdminAuth, Auth},
    types::Context,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

async fn get_users(State(ctx): State<Arc<Context>>, _: AdminAuth) -> impl IntoResponse {
    match repository::find_all(&ctx.db_conn.pool).await {
        Ok(users) => (StatusCode::OK, Json(json!(users))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch users" })),
        ),
    }
}

#[derive(Deserialize, Validate)]
struct CreateUserPayload {
    #[validate(email)]
    email: String,
    name: Option<String>,
}

async fn create_user(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<CreateUserPayload>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })));
    }

    // Existence check before insert; the original system relies on this
    // read-then-write rather than a unique constraint.
    match repository::find_by_email(&ctx.db_conn.pool, payload.email.clone()).await {
        Ok(Some(_)) => {
            return (
                StatusCode::OK,
                Json(json!({ "message": "user already exists" })),
            )
        }
        Ok(None) => (),
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to create user" })),
            )
        }
    }

    match repository::create(
        &ctx.db_conn.pool,
        repository::CreateUserPayload {
            email: payload.email,
            name: payload.name,
        },
    )
    .await
    {
        Ok(user) => (StatusCode::CREATED, Json(json!(user))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to create user" })),
        ),
    }
}

async fn get_admin_status_by_email(
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

    match repository::find_by_email(&ctx.db_conn.pool, email).await {
        Ok(user) => {
            let admin = user.map(|user| repository::is_admin(&user)).unwrap_or(false);
            (StatusCode::OK, Json(json!({ "admin": admin })))
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch user" })),
        ),
    }
}

async fn set_user_role_to_admin(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    _: AdminAuth,
) -> impl IntoResponse {
    match repository::set_role_by_id(&ctx.db_conn.pool, id, repository::Role::Admin).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Update successful" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to update user" })),
        ),
    }
}

async fn delete_user_by_id(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    _: AdminAuth,
) -> impl IntoResponse {
    match repository::delete_by_id(&ctx.db_conn.pool, id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "User deleted successfully" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to delete user" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route(
            "/admin/:id",
            get(get_admin_status_by_email).patch(set_user_role_to_admin),
        )
        .route("/:id", delete(delete_user_by_id))
}
