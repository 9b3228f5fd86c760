//! In-memory user repository stand-in.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use chrono::Utc;
use finapi_database::{NewUser, StoreResult, User};

use super::user_service::UserStore;

/// In-memory user store backed by a hash map with an email index.
///
/// Clones share state, so a user service and an auth service can
/// operate on the same records. Unlike the SQLite repository there is
/// no unique constraint here: callers relying on the service-level
/// pre-check must not share one instance across racing create calls.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    email_index: Arc<RwLock<HashMap<String, i64>>>,
    next_id: Arc<RwLock<i64>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            email_index: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserRepository {
    async fn create(&self, new_user: &NewUser) -> StoreResult<User> {
        let user_id = {
            let mut next_id = self.next_id.write().await;
            let user_id = *next_id;
            *next_id += 1;
            user_id
        };

        let now = Utc::now().to_rfc3339();
        let user = User {
            id: user_id,
            public_id: cuid2::create_id(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            created_at: now.clone(),
            updated_at: now,
        };

        // Only one map lock is held at a time so lookups running
        // concurrently with creates cannot wait on each other in a cycle.
        {
            let mut users = self.users.write().await;
            users.insert(user_id, user.clone());
        }
        {
            let mut email_index = self.email_index.write().await;
            email_index.insert(new_user.email.clone(), user_id);
        }

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user_id = {
            let email_index = self.email_index.read().await;
            email_index.get(email).copied()
        };
        match user_id {
            Some(user_id) => {
                let users = self.users.read().await;
                Ok(users.get(&user_id).cloned())
            }
            None => Ok(None),
        }
    }

    async fn find_by_public_id(&self, public_id: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.public_id == public_id).cloned())
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        let email_index = self.email_index.read().await;
        Ok(email_index.contains_key(email))
    }

    async fn count(&self) -> StoreResult<i64> {
        let users = self.users.read().await;
        Ok(users.len() as i64)
    }
}
