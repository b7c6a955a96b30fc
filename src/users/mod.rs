//! # User Subsystem
//!
//! Everything the service knows about users: the record types, the
//! in-memory store that owns them, the wire protocol, and the HTTP
//! handlers.
//!
//! ## Core Concepts
//!
//! - **Record**: a `User` is an id plus a display name, nothing more.
//! - **Id discipline**: ids start at 1 and count upward forever; a deleted
//!   user's id is never handed out again.
//! - **Single lock**: the store serializes every operation behind one
//!   mutex, which is plenty for the data volumes this service targets.
//! - **Validate first**: handlers reject bad input before the store is
//!   touched, so failed requests never mutate state.
//!
//! ## Submodules
//!
//! - `types`: `User` and `UserId`
//! - `store`: the mutex-guarded in-memory store
//! - `protocol`: endpoint paths, payload shapes, validation
//! - `handlers`: axum handlers wiring HTTP onto the store

pub mod handlers;
pub mod protocol;
pub mod store;
pub mod types;
