use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Actor, Movie},
        dto::request::{CreateActorRequest, CreateMovieRequest, UpdateActorRequest, UpdateMovieRequest},
    },
    repositories::{ActorRepository, MovieRepository},
};

/// Actors, movies and the casts linking them.
pub struct CastingService {
    actors: Arc<dyn ActorRepository>,
    movies: Arc<dyn MovieRepository>,
}

impl CastingService {
    pub fn new(actors: Arc<dyn ActorRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { actors, movies }
    }

    pub async fn list_actors(&self) -> AppResult<Vec<Actor>> {
        let actors = self.actors.find_all().await?;
        if actors.is_empty() {
            return Err(AppError::NotFound("No actors".to_string()));
        }
        Ok(actors)
    }

    pub async fn get_actor(&self, id: i64) -> AppResult<Actor> {
        self.actors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Actor with id '{}' not found", id)))
    }

    pub async fn create_actor(&self, request: CreateActorRequest) -> AppResult<Actor> {
        request.validate()?;

        let actor = Actor::new(
            request.name.as_deref().unwrap_or_default(),
            request.age.unwrap_or_default(),
            request.gender.as_deref().unwrap_or_default(),
        );
        let created = self
            .actors
            .create(actor)
            .await
            .map_err(AppError::into_unprocessable)?;
        log::info!("Created actor {}", created.id);
        Ok(created)
    }

    pub async fn update_actor(&self, id: i64, request: UpdateActorRequest) -> AppResult<Actor> {
        let mut actor = self.get_actor(id).await?;
        request.validate()?;

        if let Some(name) = request.name {
            actor.name = name;
        }
        if let Some(age) = request.age {
            actor.age = age;
        }
        if let Some(gender) = request.gender {
            actor.gender = gender;
        }

        self.actors
            .update(actor)
            .await
            .map_err(AppError::into_unprocessable)
    }

    pub async fn delete_actor(&self, id: i64) -> AppResult<()> {
        self.actors
            .delete(id)
            .await
            .map_err(AppError::into_unprocessable)?;

        let uncast = self.movies.remove_actor_everywhere(id).await?;
        log::info!("Deleted actor {} and removed it from {} casts", id, uncast);
        Ok(())
    }

    pub async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        let movies = self.movies.find_all().await?;
        if movies.is_empty() {
            return Err(AppError::NotFound("No movies".to_string()));
        }
        Ok(movies)
    }

    pub async fn get_movie(&self, id: i64) -> AppResult<Movie> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with id '{}' not found", id)))
    }

    pub async fn create_movie(&self, request: CreateMovieRequest) -> AppResult<Movie> {
        request.validate()?;

        let (Some(title), Some(release_date)) = (request.title, request.release_date) else {
            return Err(AppError::Unprocessable("title and release_date are required".into()));
        };
        let created = self
            .movies
            .create(Movie::new(&title, release_date))
            .await
            .map_err(AppError::into_unprocessable)?;
        log::info!("Created movie {}", created.id);
        Ok(created)
    }

    pub async fn update_movie(&self, id: i64, request: UpdateMovieRequest) -> AppResult<Movie> {
        let mut movie = self.get_movie(id).await?;
        request.validate()?;

        if let Some(title) = request.title {
            movie.title = title;
        }
        if let Some(release_date) = request.release_date {
            movie.release_date = release_date;
        }

        self.movies
            .update(movie)
            .await
            .map_err(AppError::into_unprocessable)
    }

    pub async fn delete_movie(&self, id: i64) -> AppResult<()> {
        self.movies
            .delete(id)
            .await
            .map_err(AppError::into_unprocessable)?;
        log::info!("Deleted movie {}", id);
        Ok(())
    }

    /// Adds the actor to the movie's cast. Casting twice leaves one entry.
    pub async fn cast_actor(&self, movie_id: i64, actor_id: i64) -> AppResult<Movie> {
        let mut movie = self.get_movie(movie_id).await?;
        self.get_actor(actor_id).await?;

        if !movie.cast(actor_id) {
            log::debug!("Actor {} already cast in movie {}", actor_id, movie_id);
            return Ok(movie);
        }

        self.movies
            .update(movie)
            .await
            .map_err(AppError::into_unprocessable)
    }

    pub async fn uncast_actor(&self, movie_id: i64, actor_id: i64) -> AppResult<Movie> {
        let mut movie = self.get_movie(movie_id).await?;

        if !movie.uncast(actor_id) {
            return Err(AppError::NotFound(format!(
                "Actor {} is not cast in movie {}",
                actor_id, movie_id
            )));
        }

        self.movies
            .update(movie)
            .await
            .map_err(AppError::into_unprocessable)
    }
}
