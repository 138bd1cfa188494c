pub mod casting_service;
pub mod drink_service;
pub mod pagination;
pub mod quiz_selector;
pub mod trivia_service;

pub use casting_service::CastingService;
pub use drink_service::DrinkService;
pub use trivia_service::{QuestionPage, TriviaService};
