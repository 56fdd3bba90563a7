//! User model

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validation::not_blank, Entity, Replaceable};

/// Library user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct User {
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,
    /// Free text, the format is not checked
    #[validate(custom(function = "not_blank", message = "email is required"))]
    pub email: String,
}

impl Entity for User {
    const NAME: &'static str = "user";
    const PLURAL: &'static str = "users";
    const FIELD_ORDER: &'static [&'static str] = &["name", "email"];
}

impl Replaceable for User {
    fn update_set(&self) -> Document {
        doc! {
            "name": self.name.as_str(),
            "email": self.email.as_str(),
        }
    }
}
