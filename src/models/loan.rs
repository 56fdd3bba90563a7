//! Loan model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validation::not_blank, Entity};

/// Loan of a book to a user.
///
/// `user_id` and `book_id` are free text and are not checked against the
/// users and books collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct Loan {
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "description is required"))]
    pub description: String,
    pub user_id: String,
    pub book_id: String,
    /// Always false at creation, flipped once by a return
    pub is_returned: bool,
}

impl Entity for Loan {
    const NAME: &'static str = "loan";
    const PLURAL: &'static str = "loans";
    const FIELD_ORDER: &'static [&'static str] = &["name", "description"];
}
