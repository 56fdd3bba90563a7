//! Identifier wrappers around entity fields

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An entity as persisted: the fields plus the store's `_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: T,
}

/// An entity as rendered over HTTP, with the identifier as a hex string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    pub fn new(id: ObjectId, fields: T) -> Self {
        Self {
            id: id.to_hex(),
            fields,
        }
    }
}

impl<T> From<Stored<T>> for Record<T> {
    fn from(stored: Stored<T>) -> Self {
        Record::new(stored.id, stored.fields)
    }
}
