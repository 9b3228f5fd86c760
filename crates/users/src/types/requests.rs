//! Request types for the user management services.

use serde::{Deserialize, Serialize};

/// Request to create a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    /// Check that the required fields are present. Email format
    /// validation belongs to the web layer in front of this core.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name cannot be empty".to_string());
        }

        if self.email.trim().is_empty() {
            return Err("email cannot be empty".to_string());
        }

        if self.password.is_empty() {
            return Err("password cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Request to authenticate an existing user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "User Test".to_string(),
            email: "test@finapi.com".to_string(),
            password: "123456".to_string(),
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_empty_fields() {
        let mut request = valid_request();
        request.name = "  ".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.email = String::new();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.password = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn leaves_email_format_to_the_caller() {
        let mut request = valid_request();
        request.email = "user@localhost".to_string();
        assert!(request.validate().is_ok());
    }
}
