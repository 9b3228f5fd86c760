//! User service for creating users and looking up profiles.

use finapi_database::{NewUser, StoreError, StoreResult, User, UserRepository};
use sqlx::SqlitePool;
use tracing::info;

use super::memory_repository::InMemoryUserRepository;
use crate::types::{CreateUserRequest, UserError, UserResult};
use crate::utils::hash_password;

/// Seam between the services and the record store. Implemented by the
/// SQLite repository and by the in-memory stand-in.
pub trait UserStore {
    async fn create(&self, new_user: &NewUser) -> StoreResult<User>;
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn find_by_public_id(&self, public_id: &str) -> StoreResult<Option<User>>;
    async fn email_exists(&self, email: &str) -> StoreResult<bool>;
    async fn count(&self) -> StoreResult<i64>;
}

impl UserStore for UserRepository {
    async fn create(&self, new_user: &NewUser) -> StoreResult<User> {
        self.create(new_user).await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.find_by_email(email).await
    }

    async fn find_by_public_id(&self, public_id: &str) -> StoreResult<Option<User>> {
        self.find_by_public_id(public_id).await
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        self.email_exists(email).await
    }

    async fn count(&self) -> StoreResult<i64> {
        self.count().await
    }
}

/// Service for managing user records
pub struct UserService<S> {
    store: S,
}

impl UserService<UserRepository> {
    /// Create a service backed by the SQLite repository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: UserRepository::new(pool),
        }
    }
}

impl UserService<InMemoryUserRepository> {
    /// Create a service backed by the in-memory stand-in
    pub fn in_memory() -> Self {
        Self {
            store: InMemoryUserRepository::new(),
        }
    }
}

impl<S> UserService<S>
where
    S: UserStore,
{
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a new user.
    ///
    /// The email uniqueness pre-check and the insert are two separate
    /// store calls; the SQLite repository's UNIQUE constraint catches
    /// the remaining window, and that violation is reported as
    /// [`UserError::UserAlreadyExists`] as well.
    pub async fn create_user(&self, request: CreateUserRequest) -> UserResult<User> {
        request.validate().map_err(UserError::Validation)?;

        if self.store.find_by_email(&request.email).await?.is_some() {
            return Err(UserError::UserAlreadyExists);
        }

        let password_hash = hash_password(&request.password)?;

        let new_user = NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        };

        let user = self.store.create(&new_user).await.map_err(|e| match e {
            StoreError::Duplicate(_) => UserError::UserAlreadyExists,
            other => UserError::Store(other),
        })?;

        info!(user = %user.public_id, email = %user.email, "created user");
        Ok(user)
    }

    /// Look up a user by public identifier.
    pub async fn show_user_profile(&self, public_id: &str) -> UserResult<User> {
        self.store
            .find_by_public_id(public_id)
            .await?
            .ok_or(UserError::UserNotFound)
    }
}
