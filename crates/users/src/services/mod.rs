//! Business logic layer: user creation and authentication.

pub mod auth_service;
pub mod memory_repository;
pub mod user_service;

pub use auth_service::AuthService;
pub use memory_repository::InMemoryUserRepository;
pub use user_service::{UserService, UserStore};
