//! Integration tests for the users crate against a real SQLite database.

use finapi_config::{AuthConfig, DatabaseConfig};
use finapi_database::{initialize_database, UserRepository};
use finapi_users::{
    AuthError, AuthService, AuthenticateRequest, CreateUserRequest, UserError, UserService,
};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn create_test_database() -> (SqlitePool, TempDir) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();

    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test_users.db");

    let config = DatabaseConfig {
        url: format!("sqlite://{}", db_path.display()),
        max_connections: 1,
    };

    let pool = initialize_database(&config)
        .await
        .expect("failed to initialize test database");

    (pool, temp_dir)
}

fn create_test_services(pool: SqlitePool) -> (UserService<UserRepository>, AuthService<UserRepository>) {
    let users = UserService::new(pool.clone());
    let auth = AuthService::new(pool, &AuthConfig::default());
    (users, auth)
}

fn test_user() -> CreateUserRequest {
    CreateUserRequest {
        name: "User Test".to_string(),
        email: "test@finapi.com".to_string(),
        password: "123456".to_string(),
    }
}

#[tokio::test]
async fn create_user_returns_identified_entity() {
    let (pool, _temp_dir) = create_test_database().await;
    let (users, _auth) = create_test_services(pool);

    let user = users.create_user(test_user()).await.unwrap();

    assert!(!user.public_id.is_empty());
    assert_eq!(user.email, "test@finapi.com");
    assert_eq!(user.name, "User Test");
    assert_ne!(user.password_hash, "123456");
}

#[tokio::test]
async fn duplicate_create_rejected_and_single_record_remains() {
    let (pool, _temp_dir) = create_test_database().await;
    let (users, _auth) = create_test_services(pool);

    users.create_user(test_user()).await.unwrap();

    let result = users.create_user(test_user()).await;
    assert!(matches!(result, Err(UserError::UserAlreadyExists)));

    assert_eq!(users.store().count().await.unwrap(), 1);
}

#[tokio::test]
async fn create_then_authenticate_returns_token() {
    let (pool, _temp_dir) = create_test_database().await;
    let (users, auth) = create_test_services(pool);

    let created = users.create_user(test_user()).await.unwrap();

    let response = auth
        .authenticate(AuthenticateRequest {
            email: "test@finapi.com".to_string(),
            password: "123456".to_string(),
        })
        .await
        .unwrap();

    assert!(!response.token.is_empty());
    assert_eq!(response.user.id, created.public_id);

    let claims = auth.validate_token(&response.token).unwrap();
    assert_eq!(claims.sub, created.public_id);
}

#[tokio::test]
async fn authenticate_nonexistent_user_rejected() {
    let (pool, _temp_dir) = create_test_database().await;
    let (_users, auth) = create_test_services(pool);

    let result = auth
        .authenticate(AuthenticateRequest {
            email: "nonexistentUser@test.com".to_string(),
            password: "123456".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::IncorrectEmailOrPassword)));
}

#[tokio::test]
async fn authenticate_wrong_password_rejected() {
    let (pool, _temp_dir) = create_test_database().await;
    let (users, auth) = create_test_services(pool);

    users.create_user(test_user()).await.unwrap();

    let result = auth
        .authenticate(AuthenticateRequest {
            email: "test@finapi.com".to_string(),
            password: "incorrect password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::IncorrectEmailOrPassword)));
}

#[tokio::test]
async fn profile_lookup_after_create() {
    let (pool, _temp_dir) = create_test_database().await;
    let (users, _auth) = create_test_services(pool);

    let created = users.create_user(test_user()).await.unwrap();

    let profile = users.show_user_profile(&created.public_id).await.unwrap();
    assert_eq!(profile.email, created.email);

    let missing = users.show_user_profile("missing").await;
    assert!(matches!(missing, Err(UserError::UserNotFound)));
}

#[tokio::test]
async fn stored_record_never_carries_plaintext_password() {
    let (pool, _temp_dir) = create_test_database().await;
    let (users, _auth) = create_test_services(pool.clone());

    users.create_user(test_user()).await.unwrap();

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?")
        .bind("test@finapi.com")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_ne!(stored, "123456");
    assert!(stored.starts_with("$argon2"));
}
