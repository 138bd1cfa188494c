use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Actor, Movie},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Actor>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Actor>>;
    async fn create(&self, actor: Actor) -> AppResult<Actor>;
    async fn update(&self, actor: Actor) -> AppResult<Actor>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Movie>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>>;
    async fn create(&self, movie: Movie) -> AppResult<Movie>;
    async fn update(&self, movie: Movie) -> AppResult<Movie>;
    async fn delete(&self, id: i64) -> AppResult<()>;
    /// Drops the actor from every cast. Returns the number of movies changed.
    async fn remove_actor_everywhere(&self, actor_id: i64) -> AppResult<u64>;
}

fn unique_id_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name("id_unique".to_string())
                .build(),
        )
        .build()
}

pub struct MongoActorRepository {
    db: Database,
    collection: Collection<Actor>,
}

impl MongoActorRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("actors");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.collection.create_index(unique_id_index()).await?;
        Ok(())
    }
}

#[async_trait]
impl ActorRepository for MongoActorRepository {
    async fn find_all(&self) -> AppResult<Vec<Actor>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Actor>> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn create(&self, actor: Actor) -> AppResult<Actor> {
        let mut actor = actor;
        actor.id = self.db.next_id("actors").await?;
        self.collection.insert_one(&actor).await?;
        Ok(actor)
    }

    async fn update(&self, actor: Actor) -> AppResult<Actor> {
        let result = self
            .collection
            .replace_one(doc! { "id": actor.id }, &actor)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("Actor with id '{}' not found", actor.id)));
        }

        Ok(actor)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Actor with id '{}' not found", id)));
        }

        Ok(())
    }
}

pub struct MongoMovieRepository {
    db: Database,
    collection: Collection<Movie>,
}

impl MongoMovieRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("movies");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.collection.create_index(unique_id_index()).await?;
        Ok(())
    }
}

#[async_trait]
impl MovieRepository for MongoMovieRepository {
    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn create(&self, movie: Movie) -> AppResult<Movie> {
        let mut movie = movie;
        movie.id = self.db.next_id("movies").await?;
        self.collection.insert_one(&movie).await?;
        Ok(movie)
    }

    async fn update(&self, movie: Movie) -> AppResult<Movie> {
        let result = self
            .collection
            .replace_one(doc! { "id": movie.id }, &movie)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("Movie with id '{}' not found", movie.id)));
        }

        Ok(movie)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Movie with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn remove_actor_everywhere(&self, actor_id: i64) -> AppResult<u64> {
        let result = self
            .collection
            .update_many(
                doc! { "actors": actor_id },
                doc! { "$pull": { "actors": actor_id } },
            )
            .await?;
        Ok(result.modified_count)
    }
}
