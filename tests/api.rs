//! End-to-end checks against a running instance. They need the server
//! listening on localhost with a migrated database, so they are ignored by
//! default:
//!
//!     cargo test -- --ignored

use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8000";

async fn issue_token(client: &reqwest::Client, email: &str) -> String {
    let body = client
        .post(format!("{}/jwt", BASE_URL))
        .json(&json!({ "email": email }))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();

    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn posting_the_same_email_twice_inserts_only_once() {
    let client = reqwest::Client::new();
    let email = format!("diner+{}@example.com", ulid::Ulid::new());

    let first = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "email": email, "name": "Diner" }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), reqwest::StatusCode::CREATED);

    let second = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "email": email, "name": "Diner" }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), reqwest::StatusCode::OK);

    let body = second.json::<Value>().await.unwrap();
    assert_eq!(body["message"], "user already exists");
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn admin_routes_reject_non_admin_tokens() {
    let client = reqwest::Client::new();
    let email = format!("diner+{}@example.com", ulid::Ulid::new());

    client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "email": email, "name": "Diner" }))
        .send()
        .await
        .unwrap();

    let token = issue_token(&client, &email).await;

    let res = client
        .get(format!("{}/users", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::FORBIDDEN);

    let res = client
        .get(format!("{}/admin-stats", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn protected_routes_reject_missing_tokens() {
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/users", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/payments/someone@example.com", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn payment_history_is_only_visible_to_its_owner() {
    let client = reqwest::Client::new();
    let email = format!("diner+{}@example.com", ulid::Ulid::new());
    let token = issue_token(&client, &email).await;

    let res = client
        .get(format!("{}/payments/other@example.com", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::FORBIDDEN);

    let res = client
        .get(format!("{}/payments/{}", BASE_URL, email))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn recording_a_payment_purges_the_listed_cart_items() {
    let client = reqwest::Client::new();
    let email = format!("diner+{}@example.com", ulid::Ulid::new());

    let cart_item = client
        .post(format!("{}/carts", BASE_URL))
        .json(&json!({
            "menu_item_id": "some-menu-item",
            "email": email,
            "name": "Roast Duck",
            "image": "https://example.com/duck.jpg",
            "price": "14.50"
        }))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    let cart_id = cart_item["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/payments", BASE_URL))
        .json(&json!({
            "email": email,
            "price": "14.50",
            "transaction_id": "pi_test",
            "status": "pending",
            "cart_ids": [cart_id],
            "menu_item_ids": ["some-menu-item"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);

    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["deleted_cart_items"], 1);

    let remaining = client
        .get(format!("{}/carts?email={}", BASE_URL, email))
        .send()
        .await
        .unwrap()
        .json::<Vec<Value>>()
        .await
        .unwrap();
    assert!(remaining.is_empty());
}
