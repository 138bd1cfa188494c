use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Drink,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Drink>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>>;
    /// Fails when the title is already taken.
    async fn create(&self, drink: Drink) -> AppResult<Drink>;
    async fn update(&self, drink: Drink) -> AppResult<Drink>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct MongoDrinkRepository {
    db: Database,
    collection: Collection<Drink>,
}

impl MongoDrinkRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("drinks");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for drinks collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("title_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(title_index).await?;
        Ok(())
    }
}

#[async_trait]
impl DrinkRepository for MongoDrinkRepository {
    async fn find_all(&self) -> AppResult<Vec<Drink>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Drink>> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn create(&self, drink: Drink) -> AppResult<Drink> {
        let mut drink = drink;
        drink.id = self.db.next_id("drinks").await?;
        self.collection.insert_one(&drink).await?;
        Ok(drink)
    }

    async fn update(&self, drink: Drink) -> AppResult<Drink> {
        let result = self
            .collection
            .replace_one(doc! { "id": drink.id }, &drink)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("Drink with id '{}' not found", drink.id)));
        }

        Ok(drink)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Drink with id '{}' not found", id)));
        }

        Ok(())
    }
}
