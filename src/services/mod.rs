//! Business logic services

pub mod catalog;
pub mod crud;
pub mod loans;
pub mod users;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
    pub loans: loans::LoansService,
    repository: Repository,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.books.clone()),
            users: users::UsersService::new(repository.users.clone()),
            loans: loans::LoansService::new(repository.loans.clone()),
            repository,
        }
    }

    /// Check that the document store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await?;
        Ok(())
    }
}
