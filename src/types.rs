pub use crate::utils::database;
use async_trait::async_trait;
use std::env;

#[derive(Clone)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct AuthContext {
    pub token_secret: String,
}

#[derive(Clone)]
pub struct PaymentContext {
    pub api_endpoint: String,
    pub secret_key: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: AuthContext,
    pub payment: PaymentContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub token_secret: String,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub api_endpoint: String,
    pub secret_key: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub payment: PaymentConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let token_secret =
            env::var("ACCESS_TOKEN_SECRET").expect("ACCESS_TOKEN_SECRET not set");
        let payment_api_endpoint = env::var("STRIPE_API_ENDPOINT")
            .unwrap_or_else(|_| "https://api.stripe.com".to_string());
        let payment_secret_key =
            env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY not set");

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            auth: AuthConfig { token_secret },
            payment: PaymentConfig {
                api_endpoint: payment_api_endpoint,
                secret_key: payment_secret_key,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            db_conn,
            auth: AuthContext {
                token_secret: self.auth.token_secret,
            },
            payment: PaymentContext {
                api_endpoint: self.payment.api_endpoint,
                secret_key: self.payment.secret_key,
            },
        }
    }
}
