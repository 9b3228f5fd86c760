//! Domain entities for the storage layer

pub mod user;

pub use user::{NewUser, User};
