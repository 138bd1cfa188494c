use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::{authorize, Claims},
    errors::{AppError, AppResult},
};

pub const HEADER_MUST_START_WITH_BEARER: &str = "Authorization header must start with \"Bearer\".";
pub const TOKEN_NOT_FOUND: &str = "Token not found.";
pub const HEADER_MUST_BE_BEARER_TOKEN: &str = "Authorization header must be bearer token.";

/// Extracts the token from an `Authorization` header value. `Ok(None)` when
/// there is no header at all.
pub fn bearer_token(header: Option<&str>) -> AppResult<Option<&str>> {
    let Some(header) = header else {
        return Ok(None);
    };

    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts.as_slice() {
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => {
            reject(HEADER_MUST_START_WITH_BEARER)
        }
        [] => reject(HEADER_MUST_START_WITH_BEARER),
        [_] => reject(TOKEN_NOT_FOUND),
        [_, token] => Ok(Some(*token)),
        _ => reject(HEADER_MUST_BE_BEARER_TOKEN),
    }
}

fn reject<T>(description: &str) -> AppResult<T> {
    Err(AppError::AuthenticationMissing(description.to_string()))
}

/// Verifies the bearer token when one is sent and stores either its claims or
/// the rejection in the request extensions. Every request reaches routing;
/// protected handlers turn a missing or refused token into an error through
/// the permission gate.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match verify_header(&req) {
                Ok(Some(claims)) => {
                    log::debug!("Authenticated subject '{}'", claims.sub);
                    req.extensions_mut().insert(claims);
                }
                Ok(None) => {}
                Err(rejection) => {
                    log::debug!("Bearer token rejected: {}", rejection);
                    req.extensions_mut().insert(AuthRejection(rejection));
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// A bearer header was sent but did not verify. Only protected handlers
/// report it; public routes ignore the header.
#[derive(Debug, Clone)]
struct AuthRejection(AppError);

fn verify_header(req: &ServiceRequest) -> AppResult<Option<Claims>> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|h| h.to_str().unwrap_or_default().to_string());

    let Some(token) = bearer_token(header.as_deref())? else {
        return Ok(None);
    };

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    state.jwt_service.validate_token(token).map(Some)
}

/// The verified claim set of the request, or why the sent token was refused.
pub struct Caller {
    claims: Option<Claims>,
    rejection: Option<AppError>,
}

impl Caller {
    /// Permission gate for protected handlers. A refused token is reported
    /// before any scope is looked at.
    pub fn require(&self, scope: &str) -> AppResult<&Claims> {
        if let Some(rejection) = &self.rejection {
            return Err(rejection.clone());
        }
        authorize(self.claims.as_ref(), scope)
    }
}

impl FromRequest for Caller {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let extensions = req.extensions();
        ready(Ok(Caller {
            claims: extensions.get::<Claims>().cloned(),
            rejection: extensions.get::<AuthRejection>().map(|r| r.0.clone()),
        }))
    }
}
