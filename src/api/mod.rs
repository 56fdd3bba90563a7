//! API handlers for the library REST endpoints

pub mod books;
pub mod envelope;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod users;

use std::convert::Infallible;

use axum::{
    async_trait,
    body::HttpBody,
    extract::{FromRequest, Request},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppResult, AppState};

/// Extractor for a JSON request body whose decode failure is deferred.
///
/// Handlers check the path identifier before looking at the body, so a bad
/// body is carried as an `AppError::InvalidInput` instead of rejecting the
/// request up front. An empty body decodes to the default record, whose
/// blank fields are then reported by the entity's rules.
pub struct JsonBody<T>(pub AppResult<T>);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.body().size_hint().exact() == Some(0) {
            return Ok(JsonBody(Ok(T::default())));
        }

        let body = Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| value)
            .map_err(Into::into);
        Ok(JsonBody(body))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book))
        .route("/books/:id", delete(books::delete_book))
        // Users
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
        // Loans
        .route("/loans", get(loans::list_loans))
        .route("/loans", post(loans::create_loan))
        .route("/return-loan/:id", put(loans::return_loan))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(cors)
}
