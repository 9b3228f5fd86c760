//! # finapi Users Crate
//!
//! User management and authentication for the finapi backend. Two
//! operations make up the public surface: creating a user (uniqueness
//! check, password hashing, persistence) and authenticating a user
//! (credential check, signed token issuance). Both run against a
//! [`UserStore`], with a SQLite repository for production and an
//! in-memory stand-in for tests and callers that want one.
//!
//! ## Architecture
//!
//! - **Services**: `UserService` and `AuthService`
//! - **Types**: request/response DTOs and error taxonomies
//! - **Utils**: password hashing and token issuance

pub mod services;
pub mod types;
pub mod utils;

// Re-export storage types used in the service signatures
pub use finapi_database::{NewUser, StoreError, User, UserRepository};

pub use services::{AuthService, InMemoryUserRepository, UserService, UserStore};
pub use types::{
    AuthError, AuthResponse, AuthResult, AuthenticateRequest, CreateUserRequest, UserError,
    UserResponse, UserResult,
};
pub use utils::{Claims, TokenIssuer};
