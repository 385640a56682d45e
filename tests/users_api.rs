//! Router tests for registration, login, profile and e-mail verification

mod common;

use axum::http::{Method, StatusCode};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;

use common::{TestApp, VERIFY_URL};

const MOBILE: &str = "13800138000";

fn registration(sms_code: &str) -> serde_json::Value {
    json!({
        "username": "alice01",
        "password": "password123",
        "password2": "password123",
        "mobile": MOBILE,
        "sms_code": sms_code,
        "allow": true
    })
}

// ============================================================================
// Availability checks and SMS codes
// ============================================================================

#[tokio::test]
async fn test_count_username_and_mobile() {
    let app = TestApp::new().await;
    app.seed_user("alice01", "password123", MOBILE);

    let response = app.send(Method::GET, "/usernames/alice01/count", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"username": "alice01", "count": 1}));

    let response = app.send(Method::GET, "/mobiles/13900139000/count", None, None).await;
    assert_eq!(response.body, json!({"mobile": "13900139000", "count": 0}));
}

#[tokio::test]
async fn test_sms_code_is_sent_and_throttled() {
    let app = TestApp::new().await;

    let code = app.sms_code(MOBILE).await;
    assert_eq!(code.len(), 6);
    assert_eq!(app.notifier.sms(), vec![(MOBILE.to_string(), code)]);

    let response = app.send(Method::GET, &format!("/sms_codes/{MOBILE}"), None, None).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.error_code(), "TOO_MANY_REQUESTS");
}

#[tokio::test]
async fn test_sms_code_rejects_invalid_mobile() {
    let app = TestApp::new().await;

    let response = app.send(Method::GET, "/sms_codes/12345", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.notifier.sms().is_empty());
}

// ============================================================================
// POST /users - Registration
// ============================================================================

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;
    let code = app.sms_code(MOBILE).await;

    let response = app.send(Method::POST, "/users", Some(registration(&code)), None).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["username"], "alice01");
    assert_eq!(response.body["mobile"], MOBILE);
    assert!(response.body["id"].as_i64().is_some());
    assert!(!response.body["token"].as_str().unwrap().is_empty());

    // The code is single use
    assert!(app.kv.sms_code(MOBILE).is_none());
}

#[tokio::test]
async fn test_register_with_wrong_sms_code() {
    let app = TestApp::new().await;
    app.sms_code(MOBILE).await;

    let response = app.send(Method::POST, "/users", Some(registration("000000x")), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["details"][0]["field"], "sms_code");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = TestApp::new().await;
    let mut body = registration("123456");
    body["username"] = json!("1234567");
    body["password2"] = json!("different1");

    let response = app.send(Method::POST, "/users", Some(body), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    let fields: Vec<&str> = response.body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"username"));
    assert!(fields.contains(&"password2"));
}

#[tokio::test]
async fn test_register_requires_agreement() {
    let app = TestApp::new().await;
    let code = app.sms_code(MOBILE).await;
    let mut body = registration(&code);
    body["allow"] = json!(false);

    let response = app.send(Method::POST, "/users", Some(body), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    app.seed_user("alice01", "password123", "13900139000");
    let code = app.sms_code(MOBILE).await;

    let response = app.send(Method::POST, "/users", Some(registration(&code)), None).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

// ============================================================================
// POST /authorizations - Login
// ============================================================================

#[tokio::test]
async fn test_login_with_username_or_mobile() {
    let app = TestApp::new().await;
    let user = app.seed_user("alice01", "password123", MOBILE);

    for account in ["alice01", MOBILE] {
        let response = app
            .send(
                Method::POST,
                "/authorizations",
                Some(json!({"username": account, "password": "password123"})),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["user_id"], user.id().value());
        assert_eq!(response.body["username"], "alice01");
        assert!(response.body["token"].is_string());
    }
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.seed_user("alice01", "password123", MOBILE);

    let response = app
        .send(
            Method::POST,
            "/authorizations",
            Some(json!({"username": "alice01", "password": "wrong-password"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_merges_and_clears_cart_cookie() {
    let app = TestApp::new().await;
    let user = app.seed_user("alice01", "password123", MOBILE);
    let cart = STANDARD.encode(r#"{"1": {"count": 2, "selected": true}, "5": {"count": 1, "selected": false}}"#);

    let response = app
        .send_with_cookie(
            Method::POST,
            "/authorizations",
            Some(json!({"username": "alice01", "password": "password123"})),
            None,
            Some(&format!("cart={cart}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stored = app.kv.cart(user.id());
    assert_eq!(stored.get(&1), Some(&(2, true)));
    assert_eq!(stored.get(&5), Some(&(1, false)));
    assert!(response.set_cookies().iter().any(|c| c.starts_with("cart=")));
}

#[tokio::test]
async fn test_login_ignores_broken_cart_cookie() {
    let app = TestApp::new().await;
    let user = app.seed_user("alice01", "password123", MOBILE);

    let response = app
        .send_with_cookie(
            Method::POST,
            "/authorizations",
            Some(json!({"username": "alice01", "password": "password123"})),
            None,
            Some("cart=not-base64!"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(app.kv.cart(user.id()).is_empty());
    assert!(response.set_cookies().iter().any(|c| c.starts_with("cart=")));
}

// ============================================================================
// Profile and e-mail
// ============================================================================

#[tokio::test]
async fn test_profile_requires_token() {
    let app = TestApp::new().await;

    let response = app.send(Method::GET, "/user", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.send(Method::GET, "/user", None, Some("not-a-jwt")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_profile() {
    let app = TestApp::new().await;
    let user = app.seed_user("alice01", "password123", MOBILE);
    let token = app.token_for(&user);

    let response = app.send(Method::GET, "/user", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "id": user.id().value(),
            "username": "alice01",
            "mobile": MOBILE,
            "email": null,
            "email_active": false
        })
    );
}

#[tokio::test]
async fn test_email_update_and_verification() {
    let app = TestApp::new().await;
    let user = app.seed_user("alice01", "password123", MOBILE);
    let token = app.token_for(&user);

    let response = app
        .send(Method::PUT, "/email", Some(json!({"email": "alice@example.com"})), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"id": user.id().value(), "email": "alice@example.com"}));

    let emails = app.notifier.emails();
    assert_eq!(emails.len(), 1);
    let (to, link) = &emails[0];
    assert_eq!(to, "alice@example.com");
    let verification_token = link
        .strip_prefix(&format!("{VERIFY_URL}?token="))
        .expect("link should point at the verify page");

    let response = app
        .send(
            Method::GET,
            &format!("/emails/verification?token={verification_token}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"message": "OK"}));

    let response = app.send(Method::GET, "/user", None, Some(&token)).await;
    assert_eq!(response.body["email_active"], true);
}

#[tokio::test]
async fn test_stale_verification_link_is_rejected() {
    let app = TestApp::new().await;
    let user = app.seed_user("alice01", "password123", MOBILE);
    let token = app.token_for(&user);

    app.send(Method::PUT, "/email", Some(json!({"email": "old@example.com"})), Some(&token))
        .await;
    app.send(Method::PUT, "/email", Some(json!({"email": "new@example.com"})), Some(&token))
        .await;
    let (_, old_link) = app.notifier.emails()[0].clone();
    let old_token = old_link.split("?token=").nth(1).unwrap().to_string();

    let response = app
        .send(Method::GET, &format!("/emails/verification?token={old_token}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verification_requires_token() {
    let app = TestApp::new().await;

    let response = app.send(Method::GET, "/emails/verification", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .send(Method::GET, "/emails/verification?token=garbage", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = TestApp::new().await;

    let response = app.send(Method::GET, "/areas", None, None).await;

    assert!(response.headers.contains_key("x-request-id"));
}
