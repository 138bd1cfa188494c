pub mod casting_handler;
pub mod drink_handler;
pub mod health_handler;
pub mod trivia_handler;

pub use health_handler::{health_check, method_not_allowed, not_found};
