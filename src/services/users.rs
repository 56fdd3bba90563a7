//! User management service

use std::sync::Arc;

use super::crud::Crud;
use crate::{
    error::AppResult,
    models::{Record, User},
    repository::DocumentCollection,
};

#[derive(Clone)]
pub struct UsersService {
    users: Crud<User>,
}

impl UsersService {
    pub fn new(users: Option<Arc<dyn DocumentCollection<User>>>) -> Self {
        Self { users: Crud::new(users) }
    }

    pub async fn list_users(&self) -> AppResult<Vec<Record<User>>> {
        self.users.list().await
    }

    pub async fn get_user(&self, id: &str) -> AppResult<Record<User>> {
        self.users.get(id).await
    }

    pub async fn create_user(&self, user: AppResult<User>) -> AppResult<Record<User>> {
        self.users.create(user).await
    }

    pub async fn update_user(&self, id: &str, user: AppResult<User>) -> AppResult<Record<User>> {
        self.users.update(id, user).await
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.users.delete(id).await
    }
}
