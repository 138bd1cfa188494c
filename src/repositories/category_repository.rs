use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{category::DEFAULT_CATEGORIES, Category, CategoryId},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Ordered by id, so position `i` holds external category `i`.
    async fn find_all(&self) -> AppResult<Vec<Category>>;
    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>>;
    /// Inserts the reference categories when none exist. Returns how many
    /// were inserted.
    async fn seed_defaults(&self) -> AppResult<usize>;
}

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("categories");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        Ok(self.collection.find_one(doc! { "id": id.0 }).await?)
    }

    async fn seed_defaults(&self) -> AppResult<usize> {
        if self.collection.count_documents(doc! {}).await? > 0 {
            return Ok(0);
        }

        let categories: Vec<Category> = DEFAULT_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, kind)| Category::new(i as i64 + 1, kind))
            .collect();

        let result = self.collection.insert_many(&categories).await?;
        log::info!("Seeded {} categories", result.inserted_ids.len());
        Ok(result.inserted_ids.len())
    }
}
