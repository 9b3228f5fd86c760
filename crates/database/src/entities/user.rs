//! User entity definitions

use serde::Serialize;

/// A stored user record.
///
/// The password hash is carried for credential checks inside the
/// service layer and never serialized. Records only ever flow out of
/// the store, so the entity is serialize-only; inbound payloads use
/// the request types in the service crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Internal rowid, never exposed outside the storage layer.
    #[serde(skip_serializing)]
    pub id: i64,
    /// Opaque identifier callers and token claims see.
    pub public_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for inserting a new user record. The password arrives here
/// already hashed; the storage layer never sees a plaintext password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
