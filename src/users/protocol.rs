//! # User API Protocol
//!
//! Defines the HTTP surface of the user subsystem: the endpoint paths, the
//! request payload accepted by create, and the validation rules that turn
//! raw client input into typed values.
//!
//! ## Endpoints
//!
//! - `GET /users`: list every user in insertion order (200)
//! - `POST /users`: create a user from `{"name": "..."}` (201, 400)
//! - `GET /users/:id`: fetch a single user (200, 400, 404)
//! - `DELETE /users/:id`: remove a user (204, 400, 404)
//!
//! Validation happens before any store mutation, so a rejected request
//! leaves the store exactly as it was.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::users::types::UserId;

/// Path serving the user collection.
pub const ENDPOINT_USERS: &str = "/users";

/// Path addressing a single user by id.
pub const ENDPOINT_USER_BY_ID: &str = "/users/:id";

/// Message returned when the create payload carries no usable name.
pub const MSG_NAME_REQUIRED: &str = "Name is required and must be a non-empty string";

/// Message returned when a path id is not an integer.
pub const MSG_INVALID_USER_ID: &str = "Invalid user ID";

/// Message returned when an id addresses no stored user.
pub const MSG_USER_NOT_FOUND: &str = "User not found";

/// Validated payload for creating a user. `name` is already trimmed and
/// guaranteed non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Validates a raw create-user body.
///
/// The `name` field must be present, must be a JSON string, and must be
/// non-empty after trimming surrounding whitespace. Anything else (missing
/// field, `null`, a number, a blank string) is rejected with the same
/// message, so clients get one stable signal for a bad name.
pub fn parse_create_user(body: &Value) -> Result<CreateUserRequest, ApiError> {
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();

    if name.is_empty() {
        return Err(ApiError::Validation(MSG_NAME_REQUIRED.to_string()));
    }

    Ok(CreateUserRequest {
        name: name.to_string(),
    })
}

/// Parses a path segment into a `UserId`.
///
/// The whole segment (ignoring surrounding whitespace) must be a decimal
/// integer. Trailing garbage such as `"12abc"` is rejected rather than
/// truncated. Negative ids parse fine here; they simply never match a
/// stored record.
pub fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map(UserId)
        .map_err(|_| ApiError::Validation(MSG_INVALID_USER_ID.to_string()))
}
