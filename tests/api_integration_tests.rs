//! Integration Tests for API Endpoints
//!
//! Drives the full router, including automatic auction closure.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use mini_auction::{
    api::{create_router, RequestContext},
    auction::{
        AuctionFilter, AuctionService, AuctionStatus, AuctionStore, ClosurePolicy,
        InMemoryAuctionStore, IntervalResolver,
    },
    AppState,
};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use uuid::Uuid;

// == Helper Functions ==

struct TestApp {
    app: Router,
    store: Arc<InMemoryAuctionStore>,
}

fn create_test_app(interval: Duration, policy: ClosurePolicy) -> TestApp {
    let store = Arc::new(InMemoryAuctionStore::new());
    let service = AuctionService::new(store.clone(), IntervalResolver::fixed(interval), policy);
    TestApp {
        app: create_router(AppState::new(service)),
        store,
    }
}

fn valid_auction(name: &str) -> Value {
    json!({
        "product_name": name,
        "category": "Brinquedo",
        "description": "Voce vai adorar",
        "condition": 1
    })
}

async fn post_auction(app: &Router, body: Value, ctx: Option<CancellationToken>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/auction")
        .header("content-type", "application/json");
    if let Some(token) = ctx {
        builder = builder.extension(RequestContext::new(token));
    }

    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn created_id(response: Response) -> Uuid {
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    json["id"].as_str().unwrap().parse().unwrap()
}

async fn status_of(store: &InMemoryAuctionStore, id: Uuid) -> AuctionStatus {
    store.find_by_id(id).await.unwrap().status
}

// == Creation Tests ==

#[tokio::test]
async fn test_create_auction_success() {
    let t = create_test_app(Duration::from_secs(60), ClosurePolicy::Detached);

    let response = post_auction(&t.app, valid_auction("Mola maluca"), None).await;
    let id = created_id(response).await;

    let response = get(&t.app, &format!("/auction/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["product_name"], "Mola maluca");
    assert_eq!(json["status"], "active");
    assert_eq!(json["condition"], 1);
}

#[tokio::test]
async fn test_create_auction_validation_errors() {
    let t = create_test_app(Duration::from_secs(60), ClosurePolicy::Detached);

    let cases = [
        json!({"product_name": "Mola maluca", "category": "Brinquedo", "description": "Curta", "condition": 1}),
        json!({"product_name": "Mola maluca", "category": "Brinquedo", "description": "Voce vai adorar", "condition": 99}),
        json!({"product_name": "M", "category": "Brinquedo", "description": "Voce vai adorar", "condition": 1}),
        json!({"product_name": "Mola maluca", "category": "Br", "description": "Voce vai adorar", "condition": 1}),
    ];

    for body in cases {
        let response = post_auction(&t.app, body, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_to_json(response.into_body()).await;
        assert!(json.get("error").is_some());
    }

    assert!(t.store.is_empty().await);
}

#[tokio::test]
async fn test_create_auction_wrong_condition_type() {
    let t = create_test_app(Duration::from_secs(60), ClosurePolicy::Detached);

    let body = json!({"product_name": "Mola maluca", "category": "Brinquedo", "description": "Voce vai adorar", "condition": "usado"});
    let response = post_auction(&t.app, body, None).await;

    assert!(response.status().is_client_error());
    assert!(t.store.is_empty().await);
}

// == Automatic Closure Tests ==

#[tokio::test]
async fn test_auction_closes_after_interval() {
    let t = create_test_app(Duration::from_millis(30), ClosurePolicy::RequestScoped);

    let id = created_id(
        post_auction(&t.app, valid_auction("Mola maluca"), Some(CancellationToken::new())).await,
    )
    .await;
    assert_eq!(status_of(&t.store, id).await, AuctionStatus::Active);

    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(status_of(&t.store, id).await, AuctionStatus::Completed);
}

#[tokio::test]
async fn test_cancelled_context_keeps_auction_active() {
    let t = create_test_app(Duration::from_millis(100), ClosurePolicy::RequestScoped);
    let ctx = CancellationToken::new();

    let id = created_id(post_auction(&t.app, valid_auction("Mola maluca"), Some(ctx.clone())).await)
        .await;
    ctx.cancel();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(status_of(&t.store, id).await, AuctionStatus::Active);

    // Well past the interval, nothing ever closes it
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(status_of(&t.store, id).await, AuctionStatus::Active);
}

#[tokio::test]
async fn test_request_scoped_closure_ends_with_request() {
    let t = create_test_app(Duration::from_millis(30), ClosurePolicy::RequestScoped);

    let id = created_id(post_auction(&t.app, valid_auction("Mola maluca"), None).await).await;

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(status_of(&t.store, id).await, AuctionStatus::Active);
}

#[tokio::test]
async fn test_detached_closure_outlives_request() {
    let t = create_test_app(Duration::from_millis(30), ClosurePolicy::Detached);

    let id = created_id(post_auction(&t.app, valid_auction("Mola maluca"), None).await).await;

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(status_of(&t.store, id).await, AuctionStatus::Completed);
}

#[tokio::test]
async fn test_failed_insert_creates_nothing() {
    let t = create_test_app(Duration::from_millis(10), ClosurePolicy::Detached);

    t.store.disconnect();
    let response = post_auction(&t.app, valid_auction("Mola maluca"), None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("unavailable"));

    tokio::time::sleep(Duration::from_millis(50)).await;
    t.store.reconnect();

    let all = t.store.find_all(&AuctionFilter::default()).await.unwrap();
    assert!(all.is_empty());

    let stats = body_to_json(get(&t.app, "/stats").await.into_body()).await;
    assert_eq!(stats["scheduled"], 0);
}

#[tokio::test]
async fn test_closing_write_failure_leaves_auction_active() {
    let t = create_test_app(Duration::from_millis(10), ClosurePolicy::Detached);

    let id = created_id(post_auction(&t.app, valid_auction("Mola maluca"), None).await).await;
    t.store.disconnect();

    tokio::time::sleep(Duration::from_millis(50)).await;
    t.store.reconnect();

    assert_eq!(status_of(&t.store, id).await, AuctionStatus::Active);

    let stats = body_to_json(get(&t.app, "/stats").await.into_body()).await;
    assert_eq!(stats["failed"], 1);
    assert_eq!(stats["pending"], 0);
}

#[tokio::test]
async fn test_concurrent_auctions_close_independently() {
    let t = create_test_app(Duration::from_millis(30), ClosurePolicy::RequestScoped);
    let ctx = CancellationToken::new();

    let requests = ["Mola maluca", "Bicicleta", "Patinete"].map(|name| {
        let app = t.app.clone();
        let ctx = ctx.clone();
        tokio::spawn(async move { post_auction(&app, valid_auction(name), Some(ctx)).await })
    });

    for request in requests {
        let response = request.await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    tokio::time::sleep(Duration::from_millis(100)).await;

    let response = get(&t.app, "/auction").await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 3);
    for auction in json["auctions"].as_array().unwrap() {
        assert_eq!(auction["status"], "completed");
    }
}

// == Query Tests ==

#[tokio::test]
async fn test_list_auctions_filters() {
    let t = create_test_app(Duration::from_secs(60), ClosurePolicy::Detached);

    post_auction(&t.app, valid_auction("Mola maluca"), None).await;
    post_auction(&t.app, valid_auction("Bicicleta"), None).await;

    let json = body_to_json(get(&t.app, "/auction?status=active").await.into_body()).await;
    assert_eq!(json["count"], 2);

    let json = body_to_json(get(&t.app, "/auction?status=completed").await.into_body()).await;
    assert_eq!(json["count"], 0);

    let json = body_to_json(get(&t.app, "/auction?product_name=bici").await.into_body()).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["auctions"][0]["product_name"], "Bicicleta");

    let response = get(&t.app, "/auction?status=closed").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_auction_not_found() {
    let t = create_test_app(Duration::from_secs(60), ClosurePolicy::Detached);

    let response = get(&t.app, &format!("/auction/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&t.app, "/auction/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Stats and Health Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let t = create_test_app(Duration::from_millis(10), ClosurePolicy::Detached);

    post_auction(&t.app, valid_auction("Mola maluca"), None).await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let response = get(&t.app, "/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["scheduled"], 1);
    assert_eq!(json["completed"], 1);
    assert_eq!(json["pending"], 0);
    assert_eq!(json["in_flight"], 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let t = create_test_app(Duration::from_secs(60), ClosurePolicy::Detached);

    let response = get(&t.app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
}
