mod common;

use api::{ApiClient, LoginRequest, RegisterRequest};
use common::{FakeBackend, TOKEN};

#[tokio::test]
async fn test_login_returns_session() {
    let (server, _backend) = FakeBackend::start().await;
    let client = ApiClient::new(format!("{}/api", server.uri()));

    let session = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user.display_name(), "Ada");
    assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let (server, _backend) = FakeBackend::start().await;
    let client = ApiClient::new(format!("{}/api", server.uri()));

    let err = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "nope".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_register_returns_session_and_reports_conflicts() {
    let (server, _backend) = FakeBackend::start().await;
    let client = ApiClient::new(format!("{}/api", server.uri()));

    let session = client
        .register(&RegisterRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "longenough".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(session.user.display_name(), "Grace");

    let err = client
        .register(&RegisterRequest {
            name: "Someone".to_string(),
            email: "taken@example.com".to_string(),
            password: "longenough".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Registration failed"), "User already exists");
}
