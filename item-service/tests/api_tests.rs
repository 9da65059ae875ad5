mod common;

use auth::ClaimSet;
use auth::SigningKey;
use auth::TokenService;
use common::TestApp;
use common::TEST_PASSWORD;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("a@example.com", "very-strong-pass").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "a@example.com");
    assert_eq!(body["role"], "USER");
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("a@example.com", "very-strong-pass").await;
    let response = app.register("a@example.com", "another-strong-pass").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "EMAIL_TAKEN" }));
}

#[tokio::test]
async fn test_register_email_is_case_sensitive() {
    let app = TestApp::spawn().await;

    app.register("a@example.com", TEST_PASSWORD).await;
    let response = app.register("A@example.com", TEST_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = TestApp::spawn().await;

    let response = app.register("not-an-email", "short").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("Missing errors")
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "password"]);
    assert_eq!(
        body["errors"][1]["message"],
        "size must be at least 12 characters"
    );
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"][0]["field"], "email");
    assert_eq!(body["errors"][0]["message"], "must not be blank");
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"][0]["field"], "body");
}

#[tokio::test]
async fn test_login_issues_token_for_subject() {
    let app = TestApp::spawn().await;

    app.register("a@example.com", TEST_PASSWORD).await;
    let response = app.login("a@example.com", TEST_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["accessToken"].as_str().expect("Missing access token");

    let identity = app.tokens.verify(token).expect("Token should verify");
    assert_eq!(identity.subject, "a@example.com");
    assert_eq!(identity.claim_str("role"), Some("USER"));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("a@example.com", TEST_PASSWORD).await;

    let wrong_password = app.login("a@example.com", "wrong-password-1").await;
    let unknown_email = app.login("nobody@example.com", TEST_PASSWORD).await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_email: Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password, json!({ "error": "INVALID_CREDENTIALS" }));
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_protected_route_requires_identity() {
    let app = TestApp::spawn().await;

    let response = app.get("/items").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "UNAUTHORIZED" }));
}

#[tokio::test]
async fn test_rejected_tokens_leave_no_identity() {
    let app = TestApp::spawn().await;

    let other_key = SigningKey::from_secret("another-secret-key-also-at-least-32-bytes").unwrap();
    let forged = TokenService::new(&other_key)
        .issue("a@example.com", &ClaimSet::new(), chrono::Duration::hours(1))
        .unwrap();
    let expired = app
        .tokens
        .issue("a@example.com", &ClaimSet::new(), chrono::Duration::zero())
        .unwrap();

    for token in ["garbage", forged.as_str(), expired.as_str()] {
        let response = app.get_authenticated("/items", token).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = app
        .get("/items")
        .header("authorization", "Basic YTpi")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_routes_ignore_bad_tokens() {
    let app = TestApp::spawn().await;

    let response = app
        .post_authenticated("/auth/register", "garbage")
        .json(&json!({ "email": "a@example.com", "password": TEST_PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
