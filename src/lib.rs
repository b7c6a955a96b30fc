//! # User Service Library
//!
//! In-memory user directory exposed over HTTP. The crate keeps every record
//! in process memory behind a single lock, which makes the service trivially
//! restartable and the concurrency story easy to reason about.
//!
//! ## Modules
//!
//! - `users`: user records, the in-memory store, and the CRUD handlers
//! - `error`: the error taxonomy shared by every endpoint
//! - `server`: router assembly and the embedded web interface

pub mod error;
pub mod server;
pub mod users;
