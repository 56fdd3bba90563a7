//! MongoDB-backed collections

use std::marker::PhantomData;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{de::DeserializeOwned, Serialize};

use super::{DocumentCollection, StoreError, StoreResult};
use crate::models::Stored;

/// A MongoDB collection holding `T` documents.
///
/// Documents are handled as raw BSON and converted at the edges, so the
/// `_id` can live beside the entity fields instead of inside them.
pub struct MongoCollection<T> {
    inner: Collection<Document>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MongoCollection<T> {
    pub fn new(database: &Database, name: &str) -> Self {
        Self {
            inner: database.collection::<Document>(name),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> DocumentCollection<T> for MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn find_all(&self) -> StoreResult<Vec<Stored<T>>> {
        let cursor = self.inner.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        tracing::debug!(collection = %self.inner.name(), count = documents.len(), "find_all");

        documents
            .into_iter()
            .map(|document| bson::from_document(document).map_err(StoreError::from))
            .collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Stored<T>>> {
        let document = self.inner.find_one(doc! { "_id": id }).await?;
        Ok(document.map(bson::from_document).transpose()?)
    }

    async fn insert_one(&self, fields: &T) -> StoreResult<ObjectId> {
        let document = bson::to_document(fields)?;
        let result = self.inner.insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend(format!("unexpected inserted id {}", result.inserted_id)))
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<u64> {
        let result = self
            .inner
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.inner.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
