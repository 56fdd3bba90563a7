//! Data models for the library server

pub mod book;
pub mod loan;
pub mod record;
pub mod user;
pub mod validation;

use mongodb::bson::Document;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

// Re-export commonly used types
pub use book::Book;
pub use loan::Loan;
pub use record::{Record, Stored};
pub use user::User;

/// A document type kept in its own collection.
///
/// The struct holds only the entity's fields; the store-assigned identifier
/// travels alongside it in [`Stored`] and [`Record`].
pub trait Entity: Validate + Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular name used in response messages ("book")
    const NAME: &'static str;
    /// Plural name used in response messages ("books")
    const PLURAL: &'static str;
    /// Fields in the order their rules are checked
    const FIELD_ORDER: &'static [&'static str];

    /// Run the entity's rules and return the first failure, if any
    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|errors| {
            validation::first_violation(&errors, Self::FIELD_ORDER)
                .unwrap_or_else(|| errors.to_string())
        })
    }
}

/// Entities whose validated fields can be replaced in place by an update
pub trait Replaceable: Entity {
    /// The `$set` body for an update: the validated fields and nothing else
    fn update_set(&self) -> Document;
}
