//! JSON-file catalog persistence across restarts.

use axum::http::{Method, StatusCode};
use ratannam_core::{Category, Discount, Price, ProductId};
use ratannam_integration_tests::{field, get, send, test_config};
use ratannam_storefront::{
    api::CmsApi,
    catalog::{CatalogBackend, CatalogStore, JsonFileBackend},
    config::LatencyConfig,
    content::ContentStore,
    models::NewProduct,
    state::AppState,
};
use serde_json::json;

fn app_on(path: &std::path::Path) -> axum::Router {
    let mut config = test_config();
    config.catalog_path = Some(path.to_path_buf());
    ratannam_storefront::app(AppState::new(config).expect("open catalog"))
}

#[tokio::test]
async fn test_catalog_edits_survive_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.json");

    let app = app_on(&path);
    assert!(path.exists(), "first open writes the sample catalog");

    let (status, _) = send(&app, Method::DELETE, "/api/admin/products/8", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/admin/products/3",
        Some(json!({ "in_stock": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    drop(app);

    let restarted = app_on(&path);
    let (_, products) = get(&restarted, "/api/products").await;
    assert_eq!(field(&products, "id"), ["1", "2", "3", "4", "5", "6", "7"]);

    let (_, ring) = get(&restarted, "/api/products/3").await;
    assert_eq!(ring["in_stock"], true);
}

#[tokio::test]
async fn test_emptied_catalog_stays_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.json");

    let app = app_on(&path);
    for id in 1..=8 {
        let (status, _) = send(&app, Method::DELETE, &format!("/api/admin/products/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
    drop(app);

    let restarted = app_on(&path);
    let (_, products) = get(&restarted, "/api/products").await;
    assert_eq!(products, json!([]));
}

#[tokio::test]
async fn test_catalog_write_is_on_disk_when_call_returns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.json");
    let catalog = CatalogStore::open(Box::new(JsonFileBackend::new(&path))).expect("open catalog");
    let api = CmsApi::new(ContentStore::default(), catalog, LatencyConfig::none());

    let added = api
        .add_product(NewProduct {
            name: "Temple Jhumkas".to_string(),
            description: "Antique finish".to_string(),
            price: Price::from_units(42_000),
            category: Category::Gold,
            image: String::new(),
            featured: false,
            in_stock: true,
            discount: Discount::NONE,
        })
        .await
        .expect("add");
    let on_disk = JsonFileBackend::new(&path).load().expect("load").expect("stored");
    assert!(on_disk.contains(&added));

    assert!(api.delete_product(&ProductId::new("1")).await.expect("delete"));
    let on_disk = JsonFileBackend::new(&path).load().expect("load").expect("stored");
    assert!(!on_disk.iter().any(|p| p.id == ProductId::new("1")));
}

#[test]
fn test_state_keeps_startup_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.json");

    let mut config = test_config();
    config.catalog_path = Some(path.clone());
    let state = AppState::new(config).expect("open catalog");

    assert_eq!(state.config().catalog_path.as_deref(), Some(path.as_path()));
    assert!(state.config().latency.catalog.is_zero());
}

#[test]
fn test_corrupt_catalog_file_fails_startup() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.json");
    std::fs::write(&path, "[{").expect("write");

    let mut config = test_config();
    config.catalog_path = Some(path);
    assert!(AppState::new(config).is_err());
}
