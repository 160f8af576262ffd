//! Integration tests for account registration, login, and one-time passcodes.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{PASSWORD, TestApp};

/// SHA-256 of the ASCII code "123456", as stored by the OTP service.
const CODE_123456_HASH: &str = "8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92";

#[tokio::test]
async fn test_register_returns_token_and_profile() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "email": "newshopper@example.com",
                "password": PASSWORD,
                "firstName": "Nadia",
                "lastName": "Karam",
                "phone": "9613123456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let data = &response.body["data"];
    assert!(!data["token"].as_str().unwrap().is_empty());
    assert!(data["expiresAt"].is_string());
    assert_eq!(data["user"]["email"], "newshopper@example.com");
    assert_eq!(data["user"]["firstName"], "Nadia");
    assert_eq!(data["user"]["role"], "customer");
    // The password hash must never leave the server.
    assert!(data["user"].get("passwordHash").is_none());
    assert!(data["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_rejects_duplicate_email_case_insensitively() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    app.register("taken@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "email": "TAKEN@example.com",
                "password": PASSWORD,
                "firstName": "Other",
                "lastName": "Person",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "email": "weak@example.com",
                "password": "Password1",
                "firstName": "Weak",
                "lastName": "Pass",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    app.register("present@example.com").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "present@example.com", "password": "Wrong-Orchid-73"})),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "absent@example.com", "password": PASSWORD})),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], "Invalid email or password");
    assert_eq!(unknown_email.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_me_requires_and_honors_bearer_token() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let anonymous = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.body["error"], "UNAUTHORIZED");

    let (_, token) = app.register("profile@example.com").await;
    let response = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "profile@example.com");
}

#[tokio::test]
async fn test_otp_request_does_not_reveal_whether_account_exists() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let response = app
        .request(
            "POST",
            "/api/auth/otp/request",
            Some(json!({"email": "nobody@example.com"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["message"],
        "If an account exists for this email, a code has been sent"
    );
}

#[tokio::test]
async fn test_otp_verify_signs_in_and_consumes_the_code() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (user_id, _) = app.register("otp@example.com").await;
    sqlx::query(
        "INSERT INTO otp_challenges (user_id, code_hash, purpose, expires_at)
         VALUES ($1, $2, 'login', NOW() + interval '10 minutes')",
    )
    .bind(user_id)
    .bind(CODE_123456_HASH)
    .execute(&app.db_pool)
    .await
    .expect("Failed to seed OTP challenge");

    let body = json!({"email": "otp@example.com", "code": "123456"});
    let response = app
        .request("POST", "/api/auth/otp/verify", Some(body.clone()), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body["data"]["token"].as_str().unwrap().is_empty());
    assert_eq!(response.body["data"]["user"]["email"], "otp@example.com");

    // Codes are single-use.
    let replay = app
        .request("POST", "/api/auth/otp/verify", Some(body), None)
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
    assert_eq!(replay.body["message"], "Invalid or expired code");
}

#[tokio::test]
async fn test_otp_verify_rejects_wrong_code() {
    let app = match TestApp::spawn().await {
        Some(app) => app,
        None => return,
    };

    let (user_id, _) = app.register("wrongcode@example.com").await;
    sqlx::query(
        "INSERT INTO otp_challenges (user_id, code_hash, purpose, expires_at)
         VALUES ($1, $2, 'login', NOW() + interval '10 minutes')",
    )
    .bind(user_id)
    .bind(CODE_123456_HASH)
    .execute(&app.db_pool)
    .await
    .expect("Failed to seed OTP challenge");

    let response = app
        .request(
            "POST",
            "/api/auth/otp/verify",
            Some(json!({"email": "wrongcode@example.com", "code": "000000"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid or expired code");
}
