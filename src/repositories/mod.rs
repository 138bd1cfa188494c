pub mod casting_repository;
pub mod category_repository;
pub mod drink_repository;
pub mod question_repository;

pub use casting_repository::{
    ActorRepository, MongoActorRepository, MongoMovieRepository, MovieRepository,
};
pub use category_repository::{CategoryRepository, MongoCategoryRepository};
pub use drink_repository::{DrinkRepository, MongoDrinkRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
