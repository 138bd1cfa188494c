use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, ReturnDocument, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::time::Duration;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

const COUNTERS_COLLECTION: &str = "counters";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    /// Opens the pool and pings the database once.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.max_pool_size = Some(10);
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)?;
        client
            .database(&config.mongo_db_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);

        Ok(Self {
            client,
            db_name: config.mongo_db_name.clone(),
        })
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(collection_name)
    }

    /// Allocates the next integer id of `sequence` (1, 2, 3, ...).
    pub async fn next_id(&self, sequence: &str) -> AppResult<i64> {
        let counters: Collection<Document> = self.get_collection(COUNTERS_COLLECTION);

        let counter = counters
            .find_one_and_update(doc! { "_id": sequence }, doc! { "$inc": { "seq": 1_i64 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError(format!("Sequence '{}' could not be advanced", sequence))
            })?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("Sequence '{}': {}", sequence, e)))
    }
}
