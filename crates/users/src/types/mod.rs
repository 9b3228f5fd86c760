//! Shared types for the user management services.

pub mod errors;
pub mod requests;
pub mod responses;

pub use errors::{AuthError, AuthResult, UserError, UserResult};
pub use requests::{AuthenticateRequest, CreateUserRequest};
pub use responses::{AuthResponse, UserResponse};
