use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::users::protocol::{parse_create_user, parse_user_id, MSG_USER_NOT_FOUND};
use crate::users::store::UserStore;
use crate::users::types::User;

/// `GET /users`: returns every user in insertion order.
pub async fn handle_list_users(Extension(store): Extension<Arc<UserStore>>) -> Json<Vec<User>> {
    Json(store.list().await)
}

/// `POST /users`: validates the payload, stores the user, echoes the new
/// record back with its assigned id.
pub async fn handle_create_user(
    Extension(store): Extension<Arc<UserStore>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let request = parse_create_user(&body)?;
    let user = store.insert(request.name).await;

    tracing::info!("Created user {} ({})", user.id.0, user.name);
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users/:id`: fetches a single user by id.
pub async fn handle_get_user(
    Extension(store): Extension<Arc<UserStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&raw_id)?;

    match store.lookup(id).await {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::NotFound(MSG_USER_NOT_FOUND.to_string())),
    }
}

/// `DELETE /users/:id`: removes a single user. Success carries no body.
pub async fn handle_delete_user(
    Extension(store): Extension<Arc<UserStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_user_id(&raw_id)?;

    if store.delete(id).await {
        tracing::info!("Deleted user {}", id.0);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(MSG_USER_NOT_FOUND.to_string()))
    }
}
