//! Repository layer for document store operations

pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    Database,
};
use thiserror::Error;

use crate::{
    config::CollectionsConfig,
    models::{Book, Loan, Stored, User},
};

pub use memory::MemoryCollection;
pub use mongo::MongoCollection;

/// Failure reported by a document store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error(transparent)]
    Encode(#[from] bson::ser::Error),

    #[error(transparent)]
    Decode(#[from] bson::de::Error),

    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One logical collection of `T` documents.
///
/// Every method is a single store call; atomicity is per document.
#[async_trait]
pub trait DocumentCollection<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Unfiltered fetch of every document
    async fn find_all(&self) -> StoreResult<Vec<Stored<T>>>;

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Stored<T>>>;

    /// Insert and return the identifier assigned by the store
    async fn insert_one(&self, fields: &T) -> StoreResult<ObjectId>;

    /// `$set` the given fields on one document; returns the matched count
    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<u64>;

    /// Returns the deleted count
    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64>;
}

/// Collection handles for every entity, built once at startup
#[derive(Clone, Default)]
pub struct Repository {
    pub books: Option<Arc<dyn DocumentCollection<Book>>>,
    pub users: Option<Arc<dyn DocumentCollection<User>>>,
    pub loans: Option<Arc<dyn DocumentCollection<Loan>>>,
    database: Option<Database>,
}

impl Repository {
    /// Create a repository from explicit handles; `None` leaves a collection unwired
    pub fn new(
        books: Option<Arc<dyn DocumentCollection<Book>>>,
        users: Option<Arc<dyn DocumentCollection<User>>>,
        loans: Option<Arc<dyn DocumentCollection<Loan>>>,
    ) -> Self {
        Self {
            books,
            users,
            loans,
            database: None,
        }
    }

    /// Create a repository over a MongoDB database
    pub fn mongo(database: Database, names: &CollectionsConfig) -> Self {
        Self {
            books: mongo_handle::<Book>(&database, &names.books),
            users: mongo_handle::<User>(&database, &names.users),
            loans: mongo_handle::<Loan>(&database, &names.loans),
            database: Some(database),
        }
    }

    /// Create a repository where every collection lives in process memory
    pub fn in_memory() -> Self {
        Self::new(
            Some(Arc::new(MemoryCollection::<Book>::new())),
            Some(Arc::new(MemoryCollection::<User>::new())),
            Some(Arc::new(MemoryCollection::<Loan>::new())),
        )
    }

    /// Round-trip to the database server, if there is one
    pub async fn ping(&self) -> StoreResult<()> {
        if let Some(database) = &self.database {
            database.run_command(doc! { "ping": 1 }).await?;
        }
        Ok(())
    }
}

fn mongo_handle<T>(database: &Database, name: &str) -> Option<Arc<dyn DocumentCollection<T>>>
where
    MongoCollection<T>: DocumentCollection<T>,
    T: Send + Sync + 'static,
{
    if name.trim().is_empty() {
        tracing::warn!("No collection name configured, {} collection left unwired", std::any::type_name::<T>());
        return None;
    }
    Some(Arc::new(MongoCollection::<T>::new(database, name)))
}
