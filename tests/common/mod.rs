#![allow(dead_code)]

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use fsnd_server::{
    app_state::{AppState, Repositories},
    auth::Claims,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Actor, Category, CategoryId, Drink, Movie, Question},
    repositories::{
        ActorRepository, CategoryRepository, DrinkRepository, MovieRepository, QuestionRepository,
    },
};

/// Builds the full route table over `$state`, wrapped the way `main` wraps it.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(fsnd_server::auth::AuthMiddleware)
                .wrap(fsnd_server::middleware::RequestIdMiddleware)
                .configure(fsnd_server::routes::configure),
        )
        .await
    };
}

type Table<T> = Arc<RwLock<BTreeMap<i64, T>>>;

fn next_key<T>(rows: &BTreeMap<i64, T>) -> i64 {
    rows.keys().next_back().copied().unwrap_or(0) + 1
}

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: Table<Question>,
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.questions.read().await.values().cloned().collect())
    }

    async fn find_by_category(&self, category: CategoryId) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        let term = term.to_lowercase();
        let questions = self.questions.read().await;
        Ok(questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        Ok(self.questions.read().await.get(&id).cloned())
    }

    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        let question = question.with_id(next_key(&questions));
        questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.questions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Table<Category>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        Ok(self.categories.read().await.get(&id.0).cloned())
    }

    async fn seed_defaults(&self) -> AppResult<usize> {
        let mut categories = self.categories.write().await;
        if !categories.is_empty() {
            return Ok(0);
        }
        for (i, kind) in fsnd_server::models::domain::category::DEFAULT_CATEGORIES
            .iter()
            .enumerate()
        {
            let id = i as i64 + 1;
            categories.insert(id, Category::new(id, kind));
        }
        Ok(categories.len())
    }
}

#[derive(Default)]
pub struct InMemoryDrinkRepository {
    drinks: Table<Drink>,
}

#[async_trait]
impl DrinkRepository for InMemoryDrinkRepository {
    async fn find_all(&self) -> AppResult<Vec<Drink>> {
        Ok(self.drinks.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>> {
        Ok(self.drinks.read().await.get(&id).cloned())
    }

    async fn create(&self, drink: Drink) -> AppResult<Drink> {
        let mut drinks = self.drinks.write().await;
        if drinks.values().any(|d| d.title == drink.title) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: title '{}'",
                drink.title
            )));
        }

        let mut drink = drink;
        drink.id = next_key(&drinks);
        drinks.insert(drink.id, drink.clone());
        Ok(drink)
    }

    async fn update(&self, drink: Drink) -> AppResult<Drink> {
        let mut drinks = self.drinks.write().await;
        if drinks.values().any(|d| d.title == drink.title && d.id != drink.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: title '{}'",
                drink.title
            )));
        }
        if !drinks.contains_key(&drink.id) {
            return Err(AppError::NotFound(format!("Drink with id '{}' not found", drink.id)));
        }

        drinks.insert(drink.id, drink.clone());
        Ok(drink)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.drinks
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Drink with id '{}' not found", id)))
    }
}

#[derive(Default)]
pub struct InMemoryActorRepository {
    actors: Table<Actor>,
}

#[async_trait]
impl ActorRepository for InMemoryActorRepository {
    async fn find_all(&self) -> AppResult<Vec<Actor>> {
        Ok(self.actors.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Actor>> {
        Ok(self.actors.read().await.get(&id).cloned())
    }

    async fn create(&self, actor: Actor) -> AppResult<Actor> {
        let mut actors = self.actors.write().await;
        let mut actor = actor;
        actor.id = next_key(&actors);
        actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    async fn update(&self, actor: Actor) -> AppResult<Actor> {
        let mut actors = self.actors.write().await;
        if !actors.contains_key(&actor.id) {
            return Err(AppError::NotFound(format!("Actor with id '{}' not found", actor.id)));
        }
        actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.actors
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Actor with id '{}' not found", id)))
    }
}

#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: Table<Movie>,
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        Ok(self.movies.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        Ok(self.movies.read().await.get(&id).cloned())
    }

    async fn create(&self, movie: Movie) -> AppResult<Movie> {
        let mut movies = self.movies.write().await;
        let mut movie = movie;
        movie.id = next_key(&movies);
        movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update(&self, movie: Movie) -> AppResult<Movie> {
        let mut movies = self.movies.write().await;
        if !movies.contains_key(&movie.id) {
            return Err(AppError::NotFound(format!("Movie with id '{}' not found", movie.id)));
        }
        movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.movies
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Movie with id '{}' not found", id)))
    }

    async fn remove_actor_everywhere(&self, actor_id: i64) -> AppResult<u64> {
        let mut movies = self.movies.write().await;
        let changed = movies
            .values_mut()
            .map(|movie| movie.uncast(actor_id))
            .filter(|changed| *changed)
            .count();
        Ok(changed as u64)
    }
}

/// In-memory stores shared with the app, so tests can seed and inspect them.
#[derive(Default, Clone)]
pub struct Stores {
    pub questions: Arc<InMemoryQuestionRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
    pub drinks: Arc<InMemoryDrinkRepository>,
    pub actors: Arc<InMemoryActorRepository>,
    pub movies: Arc<InMemoryMovieRepository>,
}

impl Stores {
    pub fn app_state(&self) -> AppState {
        AppState::from_repositories(
            Config::test_config(),
            Repositories {
                questions: self.questions.clone(),
                categories: self.categories.clone(),
                drinks: self.drinks.clone(),
                actors: self.actors.clone(),
                movies: self.movies.clone(),
            },
        )
    }
}

/// Six default categories and `count` questions spread across them.
pub async fn trivia_stores(count: i64) -> Stores {
    let stores = Stores::default();
    stores.categories.seed_defaults().await.unwrap();

    for n in 1..=count {
        let category = CategoryId(1 + (n - 1) % 6);
        let question = Question::new(&format!("Trivia question number {}", n), "answer", category, 1);
        stores.questions.create(question).await.unwrap();
    }
    stores
}

pub fn token(state: &AppState, permissions: &[&str]) -> String {
    state
        .jwt_service
        .create_token("auth0|tester", permissions)
        .unwrap()
}

pub fn token_without_permissions(state: &AppState) -> String {
    let mut claims = Claims::new("auth0|tester", &[], 1);
    claims.permissions = None;
    state.jwt_service.encode_claims(&claims).unwrap()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
