use actix_web::{HttpRequest, HttpResponse};

use crate::{errors::AppError, middleware::get_request_id};

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for paths no resource matches.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!(
        "[{}] No route for {} {}",
        get_request_id(&req).unwrap_or_default(),
        req.method(),
        req.path()
    );
    Err(AppError::NotFound(req.path().to_string()))
}

/// Fallback for known paths hit with an unsupported verb.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!(
        "[{}] {} not allowed on {}",
        get_request_id(&req).unwrap_or_default(),
        req.method(),
        req.path()
    );
    Err(AppError::MethodNotAllowed)
}
