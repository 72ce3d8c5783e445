mod common;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use practicum_sdk::{PracticumClient, PracticumClientOptions, PracticumError, ReviewApi};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

const PATH: &str = "/api/user_api/homework_statuses/";

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<(Option<String>, HashMap<String, String>)>>>,
}

async fn statuses_handler(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    recorded
        .requests
        .lock()
        .unwrap()
        .push((authorization, query));

    Json(json!({
        "homeworks": [{ "homework_name": "hw1", "status": "reviewing" }],
        "current_date": 1000,
    }))
}

fn client(base_url: &str, timeout: Option<Duration>) -> PracticumClient {
    PracticumClient::new(PracticumClientOptions {
        token: "practicum-secret".to_string(),
        endpoint: Some(format!("{base_url}{PATH}")),
        timeout,
        ..Default::default()
    })
    .expect("client builds")
}

#[tokio::test]
async fn sends_oauth_header_and_watermark() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(PATH, get(statuses_handler))
        .with_state(recorded.clone());
    let base_url = common::spawn_server(router).await;

    let body = client(&base_url, None)
        .homework_statuses(1_700_000_000)
        .await
        .expect("fetch succeeds");

    assert_eq!(
        body,
        json!({
            "homeworks": [{ "homework_name": "hw1", "status": "reviewing" }],
            "current_date": 1000,
        })
    );

    let requests = recorded.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let (authorization, query) = &requests[0];
    assert_eq!(authorization.as_deref(), Some("OAuth practicum-secret"));
    assert_eq!(
        query.get("from_date").map(String::as_str),
        Some("1700000000")
    );
}

#[tokio::test]
async fn non_ok_status_is_a_status_error() {
    let router = Router::new().route(
        PATH,
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "code": "not_authenticated" })),
            )
        }),
    );
    let base_url = common::spawn_server(router).await;

    let err = client(&base_url, None)
        .homework_statuses(0)
        .await
        .expect_err("401 should fail");

    match err {
        PracticumError::StatusCode(status, body) => {
            assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
            assert!(body.contains("not_authenticated"), "body was {body}");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_schema_error() {
    let router = Router::new().route(PATH, get(|| async { "<html>maintenance</html>" }));
    let base_url = common::spawn_server(router).await;

    let err = client(&base_url, None)
        .homework_statuses(0)
        .await
        .expect_err("html should fail");

    assert!(matches!(err, PracticumError::Schema(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let base_url = common::closed_port_url().await;

    let err = client(&base_url, None)
        .homework_statuses(0)
        .await
        .expect_err("nothing listens");

    assert!(matches!(err, PracticumError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let router = Router::new().route(
        PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "homeworks": [] }))
        }),
    );
    let base_url = common::spawn_server(router).await;

    let err = client(&base_url, Some(Duration::from_millis(100)))
        .homework_statuses(0)
        .await
        .expect_err("request should time out");

    match err {
        PracticumError::Transport(error) => assert!(error.is_timeout()),
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn timeout_applies_to_a_caller_supplied_client() {
    let router = Router::new().route(
        PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "homeworks": [] }))
        }),
    );
    let base_url = common::spawn_server(router).await;

    let client = PracticumClient::new(PracticumClientOptions {
        token: "practicum-secret".to_string(),
        endpoint: Some(format!("{base_url}{PATH}")),
        timeout: Some(Duration::from_millis(100)),
        client: Some(reqwest::Client::new()),
    })
    .expect("client builds");

    let err = client
        .homework_statuses(0)
        .await
        .expect_err("request should time out");

    match err {
        PracticumError::Transport(error) => assert!(error.is_timeout()),
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn negative_watermark_is_rejected_before_sending() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(PATH, get(statuses_handler))
        .with_state(recorded.clone());
    let base_url = common::spawn_server(router).await;

    let err = client(&base_url, None)
        .homework_statuses(-1)
        .await
        .expect_err("negative watermark");

    assert!(matches!(err, PracticumError::InvalidInput(_)), "got {err:?}");
    assert!(recorded.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn uses_default_endpoint() {
    let client = PracticumClient::new(PracticumClientOptions {
        token: "practicum-secret".to_string(),
        ..Default::default()
    })
    .expect("client builds");

    assert_eq!(
        client.endpoint(),
        "https://practicum.yandex.ru/api/user_api/homework_statuses/"
    );
}
