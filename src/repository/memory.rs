//! In-process collections, used by the `memory` backend and the tests

use std::marker::PhantomData;

use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Document};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use super::{DocumentCollection, StoreError, StoreResult};
use crate::models::Stored;

/// Documents kept as BSON in insertion order.
///
/// Each operation runs under a single lock acquisition.
pub struct MemoryCollection<T> {
    documents: RwLock<Vec<Document>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            _marker: PhantomData,
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn has_id(document: &Document, id: ObjectId) -> bool {
    document.get_object_id("_id").map_or(false, |found| found == id)
}

#[async_trait]
impl<T> DocumentCollection<T> for MemoryCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn find_all(&self) -> StoreResult<Vec<Stored<T>>> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .map(|document| bson::from_document(document.clone()).map_err(StoreError::from))
            .collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Stored<T>>> {
        let documents = self.documents.read().await;
        match documents.iter().find(|document| has_id(document, id)) {
            Some(document) => Ok(Some(bson::from_document(document.clone())?)),
            None => Ok(None),
        }
    }

    async fn insert_one(&self, fields: &T) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        let mut document = Document::new();
        document.insert("_id", id);
        for (key, value) in bson::to_document(fields)? {
            document.insert(key, value);
        }

        self.documents.write().await.push(document);
        Ok(id)
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<u64> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|document| has_id(document, id)) {
            Some(document) => {
                for (key, value) in fields {
                    document.insert(key, value);
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|document| has_id(document, id)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
