//! Single-call CRUD operations shared by every entity
//!
//! Each operation checks the collection handle, then the identifier, then the
//! decoded body and its rules, and only then issues exactly one store call.
//! Create is the exception: it has no identifier and checks the body first.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, Document};

use crate::{
    error::{AppError, AppResult},
    models::{Entity, Record, Replaceable},
    repository::DocumentCollection,
};

/// Parse a path identifier into an ObjectId
pub fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidIdentifier)
}

fn not_found<T: Entity>() -> AppError {
    AppError::NotFound(format!("{} not found", T::NAME))
}

/// Unwrap a decoded body and run the entity's rules on it
fn validated<T: Entity>(input: AppResult<T>) -> AppResult<T> {
    let fields = input?;
    fields.check().map_err(AppError::Validation)?;
    Ok(fields)
}

#[derive(Clone)]
pub struct Crud<T: Entity> {
    collection: Option<Arc<dyn DocumentCollection<T>>>,
}

impl<T: Entity> Crud<T> {
    pub fn new(collection: Option<Arc<dyn DocumentCollection<T>>>) -> Self {
        Self { collection }
    }

    fn collection(&self) -> AppResult<&dyn DocumentCollection<T>> {
        self.collection.as_deref().ok_or(AppError::StoreUnavailable)
    }

    /// Every record; an empty collection is reported as not found
    pub async fn list(&self) -> AppResult<Vec<Record<T>>> {
        let collection = self.collection()?;
        let stored = collection.find_all().await?;
        if stored.is_empty() {
            return Err(AppError::NotFound(format!("no {} found", T::PLURAL)));
        }
        Ok(stored.into_iter().map(Record::from).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<Record<T>> {
        let collection = self.collection()?;
        let id = parse_id(id)?;
        collection
            .find_by_id(id)
            .await?
            .map(Record::from)
            .ok_or_else(not_found::<T>)
    }

    /// Insert a validated record and echo it back with its new identifier.
    ///
    /// The body is checked before the collection handle, so a rejected record
    /// is reported even when the store is not wired.
    pub async fn create(&self, input: AppResult<T>) -> AppResult<Record<T>> {
        let fields = validated(input)?;
        let collection = self.collection()?;
        let id = collection.insert_one(&fields).await?;
        tracing::info!("Created {} {}", T::NAME, id);
        Ok(Record::new(id, fields))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let collection = self.collection()?;
        let id = parse_id(id)?;
        if collection.delete_by_id(id).await? == 0 {
            return Err(not_found::<T>());
        }
        tracing::info!("Deleted {} {}", T::NAME, id);
        Ok(())
    }

    /// `$set` arbitrary fields on one record without reading it first
    pub async fn set(&self, id: &str, fields: Document) -> AppResult<()> {
        let collection = self.collection()?;
        let id = parse_id(id)?;
        if collection.set_fields(id, fields).await? == 0 {
            return Err(not_found::<T>());
        }
        Ok(())
    }
}

impl<T: Replaceable> Crud<T> {
    /// Replace the entity's validated fields, leaving everything else stored
    /// on the document untouched. Returns the submitted record as the new state.
    pub async fn update(&self, id: &str, input: AppResult<T>) -> AppResult<Record<T>> {
        let collection = self.collection()?;
        let id = parse_id(id)?;
        let fields = validated(input)?;
        if collection.set_fields(id, fields.update_set()).await? == 0 {
            return Err(not_found::<T>());
        }
        tracing::info!("Updated {} {}", T::NAME, id);
        Ok(Record::new(id, fields))
    }
}
