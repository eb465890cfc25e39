//! MongoDB implementation of the document store.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use super::{with_timeout, DocumentStore, StoreError, StoreResult};

/// MongoDB store over one database.
///
/// The driver's `Client` pools connections internally and is safe to share
/// across tasks, so a single `MongoStore` serves every request.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect to `uri` and ping the server, giving up after `connect_timeout`.
    pub async fn connect(
        uri: &str,
        database_name: &str,
        connect_timeout: Duration,
    ) -> StoreResult<Self> {
        with_timeout(connect_timeout, async {
            let mut options = ClientOptions::parse(uri).await?;
            options.app_name = Some("homelist".to_string());
            options.connect_timeout = Some(connect_timeout);
            options.server_selection_timeout = Some(connect_timeout);

            let client = Client::with_options(options)?;
            let store = Self {
                database: client.database(database_name),
            };
            store.ping().await?;

            tracing::info!("Connected to MongoDB database '{}'", database_name);
            Ok(store)
        })
        .await
    }

    /// Get the database reference.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let mut cursor = self.collection(collection).find(doc! {}).await?;

        let mut documents = Vec::new();
        while cursor.advance().await? {
            documents.push(cursor.deserialize_current()?);
        }

        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<ObjectId> {
        let result = self.collection(collection).insert_one(document).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::MissingId {
                collection: collection.to_string(),
            })
    }

    async fn push_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        field: &str,
        value: Bson,
    ) -> StoreResult<u64> {
        let mut push = Document::new();
        push.insert(field, value);

        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$push": push })
            .await?;

        Ok(result.matched_count)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
