//! Repository implementations for the storage layer

pub mod user_repository;

pub use user_repository::UserRepository;
