use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Verified token payload. `permissions` is the claim set checked by the
/// permission gate; a token without it is rejected there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    pub fn new(subject: &str, permissions: &[&str], expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: subject.to_string(),
            permissions: Some(permissions.iter().map(|p| p.to_string()).collect()),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
            aud: None,
            iss: None,
        }
    }

    pub fn has_permission(&self, scope: &str) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|permissions| permissions.iter().any(|p| p == scope))
    }
}
