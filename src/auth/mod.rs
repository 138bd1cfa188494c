pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod permissions;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{AuthMiddleware, Caller};
pub use permissions::{authorize, PERMISSION_NOT_FOUND};
