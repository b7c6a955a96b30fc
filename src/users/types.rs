//! Core types for the user subsystem.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a user by the store.
///
/// Ids are allocated from a monotonically increasing counter starting at 1
/// and are never reused, even after the user they belonged to is deleted.
/// On the wire a `UserId` is a bare JSON integer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// A single user record as stored and as serialized to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}
