use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{CategoryId, Question},
};

/// Every listing is ordered by question id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn find_by_category(&self, category: CategoryId) -> AppResult<Vec<Question>>;
    /// Case-insensitive substring match on the question text.
    async fn search(&self, term: &str) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>>;
    /// Stores the question under a freshly assigned id.
    async fn create(&self, question: Question) -> AppResult<Question>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    db: Database,
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self {
            db: db.clone(),
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        let category_index = IndexModel::builder().keys(doc! { "category": 1 }).build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(category_index).await?;
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_category(&self, category: CategoryId) -> AppResult<Vec<Question>> {
        let cursor = self
            .collection
            .find(doc! { "category": category.0 })
            .sort(doc! { "id": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        let filter = doc! {
            "question": { "$regex": regex::escape(term), "$options": "i" }
        };
        let cursor = self.collection.find(filter).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn create(&self, question: Question) -> AppResult<Question> {
        let id = self.db.next_id("questions").await?;
        let question = question.with_id(id);
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Question with id '{}' not found", id)));
        }

        Ok(())
    }
}
