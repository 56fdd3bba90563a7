//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{Loan, Record},
};

use super::{envelope::Envelope, JsonBody};

/// List every loan
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 302, description = "All loans"),
        (status = 404, description = "No loans, or collection not connected")
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Envelope<Vec<Record<Loan>>>> {
    let loans = state.services.loans.list_loans().await?;
    Ok(Envelope::new(StatusCode::FOUND, "loan list found", Some(loans)))
}

/// Create a new loan
///
/// The user and book references are not checked, and `is_returned` is always
/// stored as false.
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = Loan,
    responses(
        (status = 201, description = "Loan created"),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    JsonBody(loan): JsonBody<Loan>,
) -> AppResult<Envelope<Record<Loan>>> {
    let created = state.services.loans.create_loan(loan).await?;
    Ok(Envelope::new(StatusCode::CREATED, "loan created", Some(created)))
}

/// Return a borrowed book
#[utoipa::path(
    put,
    path = "/return-loan/{id}",
    tag = "loans",
    params(
        ("id" = String, Path, description = "Loan ObjectId")
    ),
    responses(
        (status = 201, description = "Loan returned"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<()>> {
    state.services.loans.return_loan(&id).await?;
    Ok(Envelope::new(StatusCode::CREATED, "loan returned", None))
}
