//! Book catalog service

use std::sync::Arc;

use super::crud::Crud;
use crate::{
    error::AppResult,
    models::{Book, Record},
    repository::DocumentCollection,
};

#[derive(Clone)]
pub struct CatalogService {
    books: Crud<Book>,
}

impl CatalogService {
    pub fn new(books: Option<Arc<dyn DocumentCollection<Book>>>) -> Self {
        Self { books: Crud::new(books) }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Record<Book>>> {
        self.books.list().await
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Record<Book>> {
        self.books.get(id).await
    }

    pub async fn create_book(&self, book: AppResult<Book>) -> AppResult<Record<Book>> {
        self.books.create(book).await
    }

    pub async fn update_book(&self, id: &str, book: AppResult<Book>) -> AppResult<Record<Book>> {
        self.books.update(id, book).await
    }

    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.books.delete(id).await
    }
}
