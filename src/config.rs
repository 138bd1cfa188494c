use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_JWT_SECRET: &str = "dev_secret_key_change_in_production";
const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_audience: Option<String>,
    pub jwt_issuer: Option<String>,
    pub jwt_expiration_hours: i64,
    pub questions_per_page: usize,
    pub seed_categories: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "fsnd-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            ),
            jwt_audience: env::var("JWT_AUDIENCE").ok().filter(|v| !v.is_empty()),
            jwt_issuer: env::var("JWT_ISSUER").ok().filter(|v| !v.is_empty()),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            questions_per_page: env::var("QUESTIONS_PER_PAGE")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(10),
            seed_categories: env::var("SEED_CATEGORIES")
                .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        }
    }

    /// Refuses to serve with the development JWT secret or one under 32 bytes.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let secret = self.jwt_secret.expose_secret();

        if secret == DEFAULT_JWT_SECRET {
            return Err(AppError::InternalError(
                "JWT_SECRET is unset; refusing to sign with the development secret".to_string(),
            ));
        }
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::InternalError(format!(
                "JWT_SECRET has {} bytes, at least {} are required",
                secret.len(),
                MIN_JWT_SECRET_LEN
            )));
        }
        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "fsnd-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_audience: None,
            jwt_issuer: None,
            jwt_expiration_hours: 1,
            questions_per_page: 10,
            seed_categories: false,
        }
    }
}
