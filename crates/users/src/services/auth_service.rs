//! Authentication service: credential checks and token issuance.

use finapi_config::AuthConfig;
use finapi_database::UserRepository;
use sqlx::SqlitePool;
use tracing::{info, warn};

use super::memory_repository::InMemoryUserRepository;
use super::user_service::UserStore;
use crate::types::{AuthError, AuthResult, AuthenticateRequest, AuthResponse, UserResponse};
use crate::utils::{verify_password, Claims, TokenIssuer};

/// Service for authenticating users against stored credentials
pub struct AuthService<S> {
    store: S,
    tokens: TokenIssuer,
}

impl AuthService<UserRepository> {
    /// Create a service backed by the SQLite repository
    pub fn new(pool: SqlitePool, config: &AuthConfig) -> Self {
        Self {
            store: UserRepository::new(pool),
            tokens: TokenIssuer::from_config(config),
        }
    }
}

impl AuthService<InMemoryUserRepository> {
    /// Create a service backed by the in-memory stand-in
    pub fn in_memory(store: InMemoryUserRepository, config: &AuthConfig) -> Self {
        Self {
            store,
            tokens: TokenIssuer::from_config(config),
        }
    }
}

impl<S> AuthService<S>
where
    S: UserStore,
{
    pub fn with_store(store: S, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }

    /// Authenticate a user and issue a signed token.
    ///
    /// A missing user and a password mismatch are indistinguishable to
    /// the caller; only storage faults surface separately.
    pub async fn authenticate(&self, request: AuthenticateRequest) -> AuthResult<AuthResponse> {
        let Some(user) = self.store.find_by_email(&request.email).await? else {
            return Err(AuthError::IncorrectEmailOrPassword);
        };

        let matches = match verify_password(&request.password, &user.password_hash) {
            Ok(matches) => matches,
            Err(e) => {
                // unparseable stored digest; reject like a mismatch
                warn!(user = %user.public_id, error = %e, "stored password digest is unreadable");
                false
            }
        };

        if !matches {
            return Err(AuthError::IncorrectEmailOrPassword);
        }

        let token = self.tokens.sign(&user.public_id)?;

        info!(user = %user.public_id, "user authenticated");

        Ok(AuthResponse {
            user: UserResponse::from(&user),
            token,
        })
    }

    /// Validate a previously issued token and return its claims.
    pub fn validate_token(&self, token: &str) -> AuthResult<Claims> {
        self.tokens.verify(token)
    }
}
