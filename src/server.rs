//! # HTTP Server Assembly
//!
//! Builds the axum router: the JSON API under `/users`, the embedded web
//! interface at `/`, request tracing, and a panic net that turns any
//! handler panic into the standard 500 payload instead of a dropped
//! connection.

use std::any::Any;
use std::sync::Arc;

use axum::http::{header, Response, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};
use bytes::Bytes;
use http_body_util::Full;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::MSG_INTERNAL_ERROR;
use crate::users::handlers::{
    handle_create_user, handle_delete_user, handle_get_user, handle_list_users,
};
use crate::users::protocol::{ENDPOINT_USERS, ENDPOINT_USER_BY_ID};
use crate::users::store::UserStore;

/// Builds the complete application router around the given store.
pub fn app(store: Arc<UserStore>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route(
            ENDPOINT_USERS,
            get(handle_list_users).post(handle_create_user),
        )
        .route(
            ENDPOINT_USER_BY_ID,
            get(handle_get_user).delete(handle_delete_user),
        )
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Serves the embedded single-page web interface.
async fn handle_index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

/// Converts a caught handler panic into the standard 500 error payload.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);

    let body = serde_json::json!({ "error": MSG_INTERNAL_ERROR }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body))
        .expect("static response parts are valid")
}
