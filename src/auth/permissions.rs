use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
};

pub const AUTHORIZATION_HEADER_MISSING: &str = "Authorization header is expected.";
pub const PERMISSIONS_NOT_INCLUDED: &str = "Permissions not included in JWT.";
pub const PERMISSION_NOT_FOUND: &str = "Permission not found.";

/// Gate for protected routes. A request without a verified token fails
/// authentication before the scope is looked at; a token whose permission
/// list lacks `required_scope` is forbidden.
pub fn authorize<'a>(claims: Option<&'a Claims>, required_scope: &str) -> AppResult<&'a Claims> {
    let claims = claims
        .ok_or_else(|| AppError::AuthenticationMissing(AUTHORIZATION_HEADER_MISSING.to_string()))?;

    if claims.permissions.is_none() {
        return Err(AppError::InvalidClaims(PERMISSIONS_NOT_INCLUDED.to_string()));
    }

    if !claims.has_permission(required_scope) {
        log::warn!(
            "Subject '{}' lacks permission '{}'",
            claims.sub,
            required_scope
        );
        return Err(AppError::Forbidden(PERMISSION_NOT_FOUND.to_string()));
    }

    Ok(claims)
}
