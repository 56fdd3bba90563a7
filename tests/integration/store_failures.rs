//! Store failures and store call counts, observed through mocked collections

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use library_server::{
    models::{Book, Stored},
    repository::{DocumentCollection, Repository, StoreError, StoreResult},
    AppConfig, AppState,
};
use mockall::mock;
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub Books {}

    #[async_trait]
    impl DocumentCollection<Book> for Books {
        async fn find_all(&self) -> StoreResult<Vec<Stored<Book>>>;
        async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Stored<Book>>>;
        async fn insert_one(&self, fields: &Book) -> StoreResult<ObjectId>;
        async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<u64>;
        async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64>;
    }
}

fn app(books: MockBooks) -> Router {
    let repository = Repository::new(Some(Arc::new(books)), None, None);
    library_server::router(AppState::new(AppConfig::default(), repository))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn dune() -> Value {
    json!({"title": "Dune", "author": "Herbert", "isbn": "978-0", "availability": 3})
}

#[tokio::test]
async fn test_list_store_error_is_passed_through() {
    let mut books = MockBooks::new();
    books
        .expect_find_all()
        .times(1)
        .returning(|| Err(StoreError::Backend("server selection timeout".into())));

    let (status, body) = send(app(books), "GET", "/books", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"status": 500, "message": "server selection timeout", "data": null}));
}

#[tokio::test]
async fn test_get_store_error_differs_from_not_found() {
    let mut books = MockBooks::new();
    books
        .expect_find_by_id()
        .times(1)
        .returning(|_| Err(StoreError::Backend("cursor killed".into())));

    let uri = format!("/books/{}", ObjectId::new().to_hex());
    let (status, body) = send(app(books), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "cursor killed");
}

#[tokio::test]
async fn test_insert_error() {
    let mut books = MockBooks::new();
    books
        .expect_insert_one()
        .times(1)
        .returning(|_| Err(StoreError::Backend("not primary".into())));

    let (status, body) = send(app(books), "POST", "/books", Some(dune())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "not primary");
}

#[tokio::test]
async fn test_create_echoes_assigned_id() {
    let id = ObjectId::new();
    let mut books = MockBooks::new();
    books
        .expect_insert_one()
        .withf(|book| book.title == "Dune" && book.availability == 3)
        .times(1)
        .returning(move |_| Ok(id));

    let (status, body) = send(app(books), "POST", "/books", Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], id.to_hex());
}

#[tokio::test]
async fn test_invalid_requests_never_reach_the_store() {
    let mut books = MockBooks::new();
    books.expect_insert_one().never();
    books.expect_set_fields().never();
    books.expect_delete_by_id().never();
    books.expect_find_by_id().never();
    let app = app(books);

    let (status, _) = send(app.clone(), "POST", "/books", Some(json!({"title": "Dune"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app.clone(), "PUT", "/books/1234", Some(dune())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app.clone(), "DELETE", "/books/1234", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app, "GET", "/books/1234", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_sets_only_book_fields() {
    let id = ObjectId::new();
    let mut books = MockBooks::new();
    books
        .expect_set_fields()
        .withf(move |target, fields| {
            let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
            *target == id && keys == ["title", "author", "isbn", "availability"]
        })
        .times(1)
        .returning(|_, _| Ok(1));

    let mut input = dune();
    input["id"] = json!(ObjectId::new().to_hex());
    input["_id"] = json!("ignored");

    let (status, body) = send(app(books), "PUT", &format!("/books/{}", id.to_hex()), Some(input)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], id.to_hex());
}

#[tokio::test]
async fn test_delete_error() {
    let mut books = MockBooks::new();
    books
        .expect_delete_by_id()
        .times(1)
        .returning(|_| Err(StoreError::Backend("write concern error".into())));

    let uri = format!("/books/{}", ObjectId::new().to_hex());
    let (status, body) = send(app(books), "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "write concern error");
}
