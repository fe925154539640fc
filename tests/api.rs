use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use theater_service::{
    app,
    config::{AdminConfig, AppConfig, Config, TheaterConfig},
    AppState,
};

const PASSWORD: &str = "test_secret";

fn test_app() -> Router {
    let config = Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            rust_log: "theater_service=debug".to_string(),
        },
        theater: TheaterConfig { rows: 9, columns: 9 },
        admin: AdminConfig { password: PASSWORD.to_string() },
    };
    app(AppState::new(config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn stats(password: Option<&str>) -> Request<Body> {
    let uri = match password {
        Some(p) => format!("/stats?password={p}"),
        None => "/stats".to_string(),
    };
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_and_banner() {
    let app = test_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));

    let (status, _) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_fresh_hall_lists_every_seat() {
    let app = test_app();
    let (status, body) = send(&app, get("/seats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_rows"], 9);
    assert_eq!(body["total_columns"], 9);

    let seats = body["available_seats"].as_array().unwrap();
    assert_eq!(seats.len(), 81);
    assert_eq!(seats[0], json!({ "row": 1, "column": 1, "price": 10 }));
    assert_eq!(seats[80], json!({ "row": 9, "column": 9, "price": 8 }));
}

#[tokio::test]
async fn test_purchase_stats_return_scenario() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/purchase", json!({ "row": 1, "column": 1 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticket"], json!({ "row": 1, "column": 1, "price": 10 }));
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, stats(Some(PASSWORD))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "current_income": 10,
            "number_of_available_seats": 80,
            "number_of_purchased_tickets": 1
        })
    );

    let (_, listing) = send(&app, get("/seats")).await;
    let seats = listing["available_seats"].as_array().unwrap();
    assert_eq!(seats.len(), 80);
    assert!(!seats.contains(&json!({ "row": 1, "column": 1, "price": 10 })));

    let (status, body) = send(&app, post_json("/return", json!({ "token": token }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "returned_ticket": { "row": 1, "column": 1, "price": 10 } })
    );

    let (_, body) = send(&app, stats(Some(PASSWORD))).await;
    assert_eq!(body["number_of_purchased_tickets"], 0);
    assert_eq!(body["current_income"], 0);
    assert_eq!(body["number_of_available_seats"], 81);
}

#[tokio::test]
async fn test_double_purchase_is_rejected() {
    let app = test_app();
    let (status, _) = send(&app, post_json("/purchase", json!({ "row": 6, "column": 2 }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post_json("/purchase", json!({ "row": 6, "column": 2 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "The ticket has been already purchased!" }));
}

#[tokio::test]
async fn test_out_of_bounds_purchase() {
    let app = test_app();
    for order in [
        json!({ "row": 10, "column": 1 }),
        json!({ "row": 1, "column": 10 }),
        json!({ "row": 0, "column": 1 }),
        json!({ "row": -1, "column": 1 }),
    ] {
        let (status, body) = send(&app, post_json("/purchase", order)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "The number of a row or a column is out of bounds!" })
        );
    }
}

#[tokio::test]
async fn test_malformed_purchase_bodies() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/purchase", json!({ "row": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Wrong body format" }));

    let (status, body) = send(&app, post_json("/purchase", json!({ "row": "one", "column": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Wrong body format" }));

    let not_json = Request::builder()
        .method(Method::POST)
        .uri("/purchase")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{row: 1"))
        .unwrap();
    let (status, body) = send(&app, not_json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Wrong body format" }));
}

#[tokio::test]
async fn test_return_failures() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/return", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Wrong body format" }));

    let (status, body) = send(&app, post_json("/return", json!({ "token": "never-issued" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Wrong token!" }));

    let (_, bought) = send(&app, post_json("/purchase", json!({ "row": 3, "column": 4 }))).await;
    let token = bought["token"].clone();
    let (status, _) = send(&app, post_json("/return", json!({ "token": token }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post_json("/return", json!({ "token": token }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Wrong token!" }));
}

#[tokio::test]
async fn test_repurchase_gets_a_fresh_token() {
    let app = test_app();
    let order = json!({ "row": 8, "column": 8 });

    let (_, first) = send(&app, post_json("/purchase", order.clone())).await;
    send(&app, post_json("/return", json!({ "token": first["token"] }))).await;
    let (status, second) = send(&app, post_json("/purchase", order)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["ticket"]["price"], 8);
    assert_ne!(first["token"], second["token"]);
}

#[tokio::test]
async fn test_stats_requires_password() {
    let app = test_app();

    let (status, body) = send(&app, stats(None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "The password is wrong!" }));

    let (status, body) = send(&app, stats(Some("TEST_SECRET"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "The password is wrong!" }));

    let (status, _) = send(&app, stats(Some(PASSWORD))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_concurrent_purchases_sell_a_seat_once() {
    let app = test_app();
    let attempts = (0..16).map(|_| {
        let app = app.clone();
        tokio::spawn(async move {
            send(&app, post_json("/purchase", json!({ "row": 2, "column": 2 }))).await.0
        })
    });

    let mut sold = 0;
    for attempt in attempts.collect::<Vec<_>>() {
        if attempt.await.unwrap() == StatusCode::OK {
            sold += 1;
        }
    }
    assert_eq!(sold, 1);

    let (_, body) = send(&app, stats(Some(PASSWORD))).await;
    assert_eq!(body["number_of_purchased_tickets"], 1);
}
