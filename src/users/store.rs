use tokio::sync::Mutex;

use crate::users::types::{User, UserId};

/// In-memory user store.
///
/// All records live in a single `Vec` guarded by one mutex, so every
/// operation observes and produces a consistent snapshot. Insertion order is
/// preserved and is the order `list` reports. The id counter only moves
/// forward: deleting a user never frees its id for reuse.
pub struct UserStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    users: Vec<User>,
    next_id: i64,
}

impl UserStore {
    /// Creates an empty store. The first inserted user receives id 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns all users in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.inner.lock().await.users.clone()
    }

    /// Adds a user under a freshly allocated id and returns the new record.
    ///
    /// The id allocation and the append happen under one lock acquisition,
    /// so concurrent inserts can never observe or hand out the same id.
    pub async fn insert(&self, name: String) -> User {
        let mut inner = self.inner.lock().await;
        let user = User {
            id: UserId(inner.next_id),
            name,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        tracing::debug!("Inserted user {} ({})", user.id.0, user.name);
        user
    }

    /// Looks up a user by id.
    pub async fn lookup(&self, id: UserId) -> Option<User> {
        self.inner
            .lock()
            .await
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    /// Removes the user with the given id. Returns `false` if no user had
    /// that id; the store is unchanged in that case.
    pub async fn delete(&self, id: UserId) -> bool {
        let mut inner = self.inner.lock().await;
        match inner.users.iter().position(|user| user.id == id) {
            Some(index) => {
                inner.users.remove(index);
                tracing::debug!("Deleted user {}", id.0);
                true
            }
            None => false,
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
