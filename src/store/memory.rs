use super::{CredentialStore, InsertOutcome, NewUser, UserRecord};
use anyhow::Result;
use async_trait::async_trait;
use std::{
    collections::{HashMap, hash_map::Entry},
    time::SystemTime,
};
use tokio::sync::RwLock;
use tracing::debug;

/// In-process store keyed by name. Used with `--dsn memory://` and in tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn now_unix_seconds() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<UserRecord>> {
        Ok(self.users.read().await.get(name).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<InsertOutcome> {
        // check and write happen under the same write guard
        let mut users = self.users.write().await;

        match users.entry(user.name.clone()) {
            Entry::Occupied(_) => {
                debug!("name already taken: {}", user.name);
                Ok(InsertOutcome::Conflict)
            }
            Entry::Vacant(slot) => {
                slot.insert(UserRecord {
                    id: user.id,
                    name: user.name,
                    password: user.password,
                    created_at: now_unix_seconds(),
                });
                Ok(InsertOutcome::Created)
            }
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn insert_then_find() {
        let store = MemoryCredentialStore::new();
        let user = NewUser::new("alice", "$2b$10$hash");
        let id = user.id;

        assert_eq!(store.insert(user).await.unwrap(), InsertOutcome::Created);

        let found = store.find_by_name("alice").await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.password, "$2b$10$hash");
        assert!(found.created_at > 0);
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let store = MemoryCredentialStore::new();
        store.insert(NewUser::new("Alice", "h")).await.unwrap();

        assert!(store.find_by_name("alice").await.unwrap().is_none());
        assert!(store.find_by_name("Alice").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn second_insert_conflicts_and_keeps_first() {
        let store = MemoryCredentialStore::new();
        store.insert(NewUser::new("alice", "first")).await.unwrap();

        let outcome = store.insert(NewUser::new("alice", "second")).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Conflict);

        let found = store.find_by_name("alice").await.unwrap().unwrap();
        assert_eq!(found.password, "first");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_admit_exactly_one() {
        let store = Arc::new(MemoryCredentialStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert(NewUser::new("carol", format!("hash-{i}")))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap() == InsertOutcome::Created {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.len().await, 1);
    }

    #[test]
    fn debug_hides_password() {
        let user = NewUser::new("alice", "$2b$10$secret-hash");
        let out = format!("{user:?}");
        assert!(out.contains("alice"));
        assert!(!out.contains("secret-hash"));
    }
}
