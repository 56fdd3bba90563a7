//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{Book, Record},
};

use super::{envelope::Envelope, JsonBody};

/// List every book
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 302, description = "All books"),
        (status = 404, description = "No books, or collection not connected"),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Envelope<Vec<Record<Book>>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Envelope::new(StatusCode::FOUND, "book list found", Some(books)))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ObjectId (24 hex characters)")
    ),
    responses(
        (status = 302, description = "Book details"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Record<Book>>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Envelope::new(StatusCode::FOUND, "book found", Some(book)))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created, echoed with its id"),
        (status = 400, description = "Invalid input or a required field is missing")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonBody(book): JsonBody<Book>,
) -> AppResult<Envelope<Record<Book>>> {
    let created = state.services.catalog.create_book(book).await?;
    Ok(Envelope::new(StatusCode::CREATED, "book created", Some(created)))
}

/// Replace a book's fields
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ObjectId (24 hex characters)")
    ),
    request_body = Book,
    responses(
        (status = 201, description = "Book updated"),
        (status = 400, description = "Invalid id, invalid input or a required field is missing"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(book): JsonBody<Book>,
) -> AppResult<Envelope<Record<Book>>> {
    let updated = state.services.catalog.update_book(&id, book).await?;
    Ok(Envelope::new(StatusCode::CREATED, "book updated", Some(updated)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<()>> {
    state.services.catalog.delete_book(&id).await?;
    Ok(Envelope::new(StatusCode::OK, "book deleted", None))
}
