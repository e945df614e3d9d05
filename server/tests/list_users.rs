use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use server::QrApiClient;
use tokio::net::TcpListener;
use types::{PageLoad, PageRequest};
use url::Url;

#[derive(Clone, Default)]
struct Upstream {
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn list_users(
    State(upstream): State<Upstream>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    upstream.seen.lock().unwrap().push(params.clone());

    let offset: u64 = params["offset"].parse().unwrap();
    match offset {
        // page 1: a full page out of 45
        0 => Json(json!({
            "success": true,
            "data": (1..=20).map(record).collect::<Vec<_>>(),
            "pagination": { "total": 45, "limit": 20, "offset": 0 }
        }))
        .into_response(),
        20 => Json(json!({ "success": false, "message": "db offline" })).into_response(),
        40 => (StatusCode::INTERNAL_SERVER_ERROR, "fatal error").into_response(),
        _ => "<html>not json</html>".into_response(),
    }
}

fn record(id: u64) -> Value {
    let validation = if id % 2 == 0 { "verified" } else { "pending" };
    json!({
        "id": id.to_string(),
        "token": format!("t{id}"),
        "full_name": format!("Pessoa {id}"),
        "validation": validation,
        "is_expired": id == 3,
        "photo_path": null
    })
}

async fn spawn_upstream() -> (QrApiClient, Upstream) {
    let upstream = Upstream::default();
    let app = Router::new()
        .route("/qrcode/list_users.php", get(list_users))
        .with_state(upstream.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let base = Url::parse(&format!("http://{addr}/qrcode")).unwrap();
    (QrApiClient::new(base), upstream)
}

#[tokio::test]
async fn first_page_is_loaded_with_total() {
    let (client, upstream) = spawn_upstream().await;

    let load = client.list_users(PageRequest::for_page(1)).await.unwrap();

    let PageLoad::Loaded { records, total } = load else {
        panic!("expected a loaded page, got {load:?}");
    };
    assert_eq!(records.len(), 20);
    assert_eq!(total, 45);
    assert_eq!(records[0].id, 1);
    assert!(records[2].is_expired);
    assert!(records[1].validation.is_verified());

    let seen = upstream.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["limit"], "20");
    assert_eq!(seen[0]["offset"], "0");
}

#[tokio::test]
async fn unsuccessful_answer_is_unavailable() {
    let (client, upstream) = spawn_upstream().await;

    let load = client.list_users(PageRequest::for_page(2)).await.unwrap();

    assert_eq!(load, PageLoad::Unavailable);
    assert_eq!(upstream.seen.lock().unwrap()[0]["offset"], "20");
}

#[tokio::test]
async fn page_number_is_sent_with_fixed_limit() {
    let (client, upstream) = spawn_upstream().await;

    let load = client.list_page(1).await.unwrap();
    assert!(matches!(load, PageLoad::Loaded { total: 45, .. }));
    assert_eq!(client.list_page(2).await.unwrap(), PageLoad::Unavailable);

    let seen = upstream.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|params| params["limit"] == "20"));
    assert_eq!(seen[1]["offset"], "20");
}

#[tokio::test]
async fn server_error_is_an_error() {
    let (client, _upstream) = spawn_upstream().await;

    let error = client.list_users(PageRequest::for_page(3)).await.unwrap_err();

    assert!(error.message.contains("unexpected status"), "{error}");
}

#[tokio::test]
async fn non_json_body_is_an_error() {
    let (client, _upstream) = spawn_upstream().await;

    let error = client.list_users(PageRequest::for_page(4)).await.unwrap_err();

    assert!(error.message.contains("not valid JSON"), "{error}");
}
