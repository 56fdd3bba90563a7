//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{Record, User},
};

use super::{envelope::Envelope, JsonBody};

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 302, description = "All users"),
        (status = 404, description = "No users, or collection not connected")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
) -> AppResult<Envelope<Vec<Record<User>>>> {
    let users = state.services.users.list_users().await?;
    Ok(Envelope::new(StatusCode::FOUND, "user list found", Some(users)))
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ObjectId")
    ),
    responses(
        (status = 302, description = "User details"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Record<User>>> {
    let user = state.services.users.get_user(&id).await?;
    Ok(Envelope::new(StatusCode::FOUND, "user found", Some(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = User,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<Envelope<Record<User>>> {
    let created = state.services.users.create_user(user).await?;
    Ok(Envelope::new(StatusCode::CREATED, "user created", Some(created)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ObjectId")
    ),
    request_body = User,
    responses(
        (status = 201, description = "User updated"),
        (status = 400, description = "Invalid id or input"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<Envelope<Record<User>>> {
    let updated = state.services.users.update_user(&id, user).await?;
    Ok(Envelope::new(StatusCode::CREATED, "user updated", Some(updated)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ObjectId")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<()>> {
    state.services.users.delete_user(&id).await?;
    Ok(Envelope::new(StatusCode::OK, "user deleted", None))
}
