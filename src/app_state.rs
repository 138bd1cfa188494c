use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        ActorRepository, CategoryRepository, DrinkRepository, MongoActorRepository,
        MongoCategoryRepository, MongoDrinkRepository, MongoMovieRepository,
        MongoQuestionRepository, MovieRepository, QuestionRepository,
    },
    services::{CastingService, DrinkService, TriviaService},
};

/// Repositories backing the three APIs.
pub struct Repositories {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub drinks: Arc<dyn DrinkRepository>,
    pub actors: Arc<dyn ActorRepository>,
    pub movies: Arc<dyn MovieRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub trivia_service: Arc<TriviaService>,
    pub drink_service: Arc<DrinkService>,
    pub casting_service: Arc<CastingService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let category_repository = Arc::new(MongoCategoryRepository::new(&db));
        category_repository.ensure_indexes().await?;
        if config.seed_categories {
            category_repository.seed_defaults().await?;
        }

        let drink_repository = Arc::new(MongoDrinkRepository::new(&db));
        drink_repository.ensure_indexes().await?;

        let actor_repository = Arc::new(MongoActorRepository::new(&db));
        actor_repository.ensure_indexes().await?;

        let movie_repository = Arc::new(MongoMovieRepository::new(&db));
        movie_repository.ensure_indexes().await?;

        Ok(Self::from_repositories(
            config,
            Repositories {
                questions: question_repository,
                categories: category_repository,
                drinks: drink_repository,
                actors: actor_repository,
                movies: movie_repository,
            },
        ))
    }

    /// Wires the services over any repository implementation.
    pub fn from_repositories(config: Config, repositories: Repositories) -> Self {
        let trivia_service = Arc::new(TriviaService::new(
            repositories.questions,
            repositories.categories,
            config.questions_per_page,
        ));
        let drink_service = Arc::new(DrinkService::new(repositories.drinks));
        let casting_service = Arc::new(CastingService::new(
            repositories.actors,
            repositories.movies,
        ));
        let jwt_service = Arc::new(JwtService::from_config(&config));

        Self {
            trivia_service,
            drink_service,
            casting_service,
            jwt_service,
            config: Arc::new(config),
        }
    }
}
