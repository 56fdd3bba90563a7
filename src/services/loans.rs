//! Loan management service

use mongodb::bson::doc;
use std::sync::Arc;

use super::crud::Crud;
use crate::{
    error::AppResult,
    models::{Loan, Record},
    repository::DocumentCollection,
};

#[derive(Clone)]
pub struct LoansService {
    loans: Crud<Loan>,
}

impl LoansService {
    pub fn new(loans: Option<Arc<dyn DocumentCollection<Loan>>>) -> Self {
        Self { loans: Crud::new(loans) }
    }

    pub async fn list_loans(&self) -> AppResult<Vec<Record<Loan>>> {
        self.loans.list().await
    }

    /// Create a loan. It always starts out not returned, whatever the body says.
    /// The user and book references are stored as given.
    pub async fn create_loan(&self, loan: AppResult<Loan>) -> AppResult<Record<Loan>> {
        let loan = loan.map(|loan| Loan {
            is_returned: false,
            ..loan
        });
        self.loans.create(loan).await
    }

    /// Mark a loan as returned. Returning an already returned loan succeeds.
    pub async fn return_loan(&self, id: &str) -> AppResult<()> {
        self.loans.set(id, doc! { "is_returned": true }).await?;
        tracing::info!("Returned loan {}", id);
        Ok(())
    }
}
