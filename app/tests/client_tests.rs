#![cfg(feature = "ssr")]

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use app::{AppError, client::LetsLearnClient, config::ApiConfig};
use assert_matches::assert_matches;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Upstream {
    categories_down: Arc<AtomicBool>,
    category_hits: Arc<AtomicUsize>,
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(origin: &str) -> LetsLearnClient {
    let config = ApiConfig::from_lookup(|key| match key {
        "API_ROOT" => Some(format!("{origin}/api/lets-learn")),
        _ => None,
    });
    LetsLearnClient::new(config).unwrap()
}

fn categories() -> Value {
    json!([
        { "id": 1, "name": "Fruits", "image": "http://127.0.0.1:8000/media/fruits.png" },
        { "id": 2, "name": "Colors", "image": null },
    ])
}

fn items() -> Value {
    json!([
        { "id": 10, "category": 1, "name": "Apple", "order": 1 },
        { "id": 11, "category": 1, "name": "Banana", "order": 0 },
        { "id": 20, "category": 2, "name": "Red", "content_name": "Red" },
    ])
}

/// Serves the lessons API under a random port; `index` builds the root
/// document from the origin so it can advertise absolute collection URLs.
async fn upstream_with_index(index: fn(&str) -> Value, state: Upstream) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    let document = index(&origin);

    let router = Router::new()
        .route(
            "/api/lets-learn/",
            get(move || {
                let document = document.clone();
                async move { Json(document) }
            }),
        )
        .route(
            "/custom/categories/",
            get(|State(state): State<Upstream>| async move {
                state.category_hits.fetch_add(1, Ordering::SeqCst);
                if state.categories_down.load(Ordering::SeqCst) {
                    return Err(StatusCode::INTERNAL_SERVER_ERROR);
                }
                Ok(Json(json!({ "count": 2, "results": categories() })))
            }),
        )
        .route("/custom/items/", get(|| async { Json(json!({ "data": items() })) }))
        .route("/api/lets-learn/categories/", get(|| async { Json(categories()) }))
        .route("/api/lets-learn/items/", get(|| async { Json(items()) }))
        .route(
            "/legacy/learningitems/",
            get(|| async { Json(json!({ "results": items() })) }),
        )
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    origin
}

fn advertised(origin: &str) -> Value {
    json!({
        "categories": format!("{origin}/custom/categories/"),
        "items": format!("{origin}/custom/items/"),
    })
}

fn silent(_: &str) -> Value {
    json!({})
}

fn legacy(origin: &str) -> Value {
    json!({ "learningitems": format!("{origin}/legacy/learningitems/") })
}

#[tokio::test]
async fn follows_advertised_collection_urls() {
    let origin = upstream_with_index(advertised, Upstream::default()).await;
    let client = client_for(&origin);

    let categories = client.categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Fruits");

    let items = client.items().await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].display_name(), "Red");
}

#[tokio::test]
async fn falls_back_to_default_paths() {
    let origin = upstream_with_index(silent, Upstream::default()).await;
    let client = client_for(&origin);

    assert_eq!(client.categories().await.unwrap().len(), 2);
    assert_eq!(client.items().await.unwrap().len(), 3);
}

#[tokio::test]
async fn uses_learningitems_when_items_is_not_advertised() {
    let origin = upstream_with_index(legacy, Upstream::default()).await;
    let client = client_for(&origin);

    let items = client.items().await.unwrap();
    assert_eq!(items.iter().map(|item| item.id).collect::<Vec<_>>(), vec![10, 11, 20]);
}

#[tokio::test]
async fn category_lookup() {
    let origin = upstream_with_index(advertised, Upstream::default()).await;
    let client = client_for(&origin);

    let fruits = client.category(1).await.unwrap().unwrap();
    assert_eq!(fruits.name, "Fruits");
    assert_eq!(client.category(99).await.unwrap(), None);
}

#[tokio::test]
async fn error_status_is_reported_and_recovers_on_retry() {
    let state = Upstream::default();
    state.categories_down.store(true, Ordering::SeqCst);
    let origin = upstream_with_index(advertised, state.clone()).await;
    let client = client_for(&origin);

    assert_eq!(
        client.category(1).await,
        Err(AppError::RemoteUnavailable("Unable to load category.".to_owned()))
    );
    assert_matches!(
        client.categories().await,
        Err(AppError::RemoteUnavailable(message)) if message == "Unable to load categories."
    );

    state.categories_down.store(false, Ordering::SeqCst);
    assert_eq!(client.category(1).await.unwrap().map(|c| c.id), Some(1));
    assert_eq!(state.category_hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn unreachable_root_is_reported() {
    let router = Router::new().route(
        "/api/lets-learn/",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let origin = serve(router).await;
    let client = client_for(&origin);

    assert_eq!(
        client.items().await,
        Err(AppError::RemoteUnavailable("Unable to reach API root.".to_owned()))
    );
}

#[tokio::test]
async fn closed_port_is_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = client_for(&origin);
    assert_matches!(client.categories().await, Err(AppError::RemoteUnavailable(_)));
}
