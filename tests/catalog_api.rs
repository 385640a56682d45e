//! Router tests for areas and browsing history

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_list_provinces() {
    let app = TestApp::new().await;
    app.db.seed_area(440_000, "Guangdong", None);
    app.db.seed_area(110_000, "Beijing", None);
    app.db.seed_area(110_100, "Beijing City", Some(110_000));

    let response = app.send(Method::GET, "/areas", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            {"id": 110_000, "name": "Beijing"},
            {"id": 440_000, "name": "Guangdong"}
        ])
    );
}

#[tokio::test]
async fn test_get_area_with_subs() {
    let app = TestApp::new().await;
    app.db.seed_area(440_000, "Guangdong", None);
    app.db.seed_area(440_300, "Shenzhen", Some(440_000));
    app.db.seed_area(440_100, "Guangzhou", Some(440_000));

    let response = app.send(Method::GET, "/areas/440000", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "id": 440_000,
            "name": "Guangdong",
            "subs": [
                {"id": 440_100, "name": "Guangzhou"},
                {"id": 440_300, "name": "Shenzhen"}
            ]
        })
    );
}

#[tokio::test]
async fn test_get_unknown_area() {
    let app = TestApp::new().await;

    let response = app.send(Method::GET, "/areas/999999", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_browse_history_keeps_five_newest() {
    let app = TestApp::new().await;
    let user = app.seed_user("alice01", "password123", "13800138000");
    let token = app.token_for(&user);
    for id in 1..=7 {
        app.db.seed_sku(id, &format!("Phone {id}"), true);
    }

    for id in [1, 2, 3, 4, 5, 6, 3] {
        let response = app
            .send(Method::POST, "/browse_histories", Some(json!({"sku_id": id})), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body, json!({"sku_id": id}));
    }

    let response = app.send(Method::GET, "/browse_histories", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<i64> = response.body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 6, 5, 4, 2]);
    assert_eq!(response.body[0]["name"], "Phone 3");
    assert_eq!(response.body[0]["price"], "1999.00");
    assert_eq!(response.body[0]["comments"], 0);
}

#[tokio::test]
async fn test_browse_history_rejects_unknown_or_unlaunched_sku() {
    let app = TestApp::new().await;
    let user = app.seed_user("alice01", "password123", "13800138000");
    let token = app.token_for(&user);
    app.db.seed_sku(1, "Discontinued", false);

    for id in [1, 42] {
        let response = app
            .send(Method::POST, "/browse_histories", Some(json!({"sku_id": id})), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
    assert!(app.kv.history(user.id()).is_empty());
}

#[tokio::test]
async fn test_browse_history_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.send(Method::GET, "/browse_histories", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
