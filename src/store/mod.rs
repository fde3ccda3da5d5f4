//! Credential store: the single collection of user records.
//!
//! Records are looked up by exact, case-sensitive name match and inserted with
//! insert-if-absent semantics. There is no update or delete path.

mod memory;
mod postgres;

pub use self::memory::MemoryCredentialStore;
pub use self::postgres::{PgCredentialStore, SCHEMA_SQL, is_unique_violation};

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// A persisted user. `password` always holds a hash, never plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub password: String,
    /// Unix seconds.
    pub created_at: i64,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("password", &"***")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Fields supplied by signup; the store assigns the rest.
#[derive(Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub name: String,
    pub password: String,
}

impl NewUser {
    #[must_use]
    pub fn new(name: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            password: password_hash.into(),
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}

/// Result of an insert-if-absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Created,
    /// A record with the same name already exists; nothing was written.
    Conflict,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the record whose name equals `name` exactly.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be queried.
    async fn find_by_name(&self, name: &str) -> Result<Option<UserRecord>>;

    /// Insert `user` unless a record with the same name exists.
    ///
    /// # Errors
    /// Returns an error if the backing store rejects the write for any reason
    /// other than a name conflict.
    async fn insert(&self, user: NewUser) -> Result<InsertOutcome>;

    /// Cheap liveness probe used by `/health`.
    ///
    /// # Errors
    /// Returns an error if the store is unreachable.
    async fn ping(&self) -> Result<()>;
}
