use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    config::Config,
    errors::{AppError, AppResult},
};

pub const TOKEN_EXPIRED: &str = "Token expired.";
pub const INCORRECT_CLAIMS: &str = "Incorrect claims. Please, check the audience and issuer.";
pub const UNPARSEABLE_TOKEN: &str = "Unable to parse authentication token.";

/// Verifies bearer tokens and turns them into a claim set.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    audience: Option<String>,
    issuer: Option<String>,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(
        secret: &SecretString,
        audience: Option<String>,
        issuer: Option<String>,
        expiration_hours: i64,
    ) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::default();
        match &audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        if let Some(iss) = &issuer {
            validation.set_issuer(&[iss]);
        }

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            audience,
            issuer,
            expiration_hours,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            config.jwt_audience.clone(),
            config.jwt_issuer.clone(),
            config.jwt_expiration_hours,
        )
    }

    /// Mints a token carrying `permissions`, stamped with the configured
    /// audience and issuer.
    pub fn create_token(&self, subject: &str, permissions: &[&str]) -> AppResult<String> {
        let mut claims = Claims::new(subject, permissions, self.expiration_hours);
        claims.aud = self.audience.clone();
        claims.iss = self.issuer.clone();

        self.encode_claims(&claims)
    }

    pub fn encode_claims(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::warn!("Rejected bearer token: {}", e);
                let description = match e.kind() {
                    ErrorKind::ExpiredSignature => TOKEN_EXPIRED,
                    ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => INCORRECT_CLAIMS,
                    _ => UNPARSEABLE_TOKEN,
                };
                AppError::AuthenticationMissing(description.to_string())
            })
    }
}
