use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user")]
    User,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_ref() {
            "admin" => Role::Admin,
            "user" => Role::User,
            role => unreachable!("Invalid user role: {}", role),
        }
    }
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Role::Admin => String::from("admin"),
            Role::User => String::from("user"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub fn is_admin(user: &User) -> bool {
    user.role == Role::Admin
}

pub struct CreateUserPayload {
    pub email: String,
    pub name: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, email, name, role)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email)
    .bind(payload.name)
    .bind(Role::User.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a user: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching all users: {}", err);
            Error::UnexpectedError
        })
}

pub async fn set_role_by_id<'e, E: PgExecutor<'e>>(e: E, id: String, role: Role) -> Result<u64> {
    sqlx::query("UPDATE users SET role = $1, updated_at = NOW() WHERE id = $2")
        .bind(role.to_string())
        .bind(id.clone())
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while updating role for user {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<u64> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting user {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage_form() {
        assert_eq!(Role::from(Role::Admin.to_string()), Role::Admin);
        assert_eq!(Role::from(Role::User.to_string()), Role::User);
    }

    #[test]
    fn admin_check_matches_role() {
        let user = User {
            id: Ulid::new().to_string(),
            email: "admin@example.com".to_string(),
            name: None,
            role: Role::Admin,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        };

        assert!(is_admin(&user));
        assert!(!is_admin(&User {
            role: Role::User,
            ..user
        }));
    }
}
