//! Book model

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validation::not_blank, Entity, Replaceable};

/// Book record.
///
/// Missing fields decode to their empty value so that they are reported by
/// the rules below rather than as malformed input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct Book {
    #[validate(custom(function = "not_blank", message = "title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "author is required"))]
    pub author: String,
    /// Not unique
    #[validate(custom(function = "not_blank", message = "isbn is required"))]
    pub isbn: String,
    /// Copies available for loan
    #[validate(range(min = 1, message = "availability must be a positive integer"))]
    pub availability: i64,
}

impl Entity for Book {
    const NAME: &'static str = "book";
    const PLURAL: &'static str = "books";
    const FIELD_ORDER: &'static [&'static str] = &["title", "author", "isbn", "availability"];
}

impl Replaceable for Book {
    fn update_set(&self) -> Document {
        doc! {
            "title": self.title.as_str(),
            "author": self.author.as_str(),
            "isbn": self.isbn.as_str(),
            "availability": self.availability,
        }
    }
}
