//! HTTP-level tests for the `/bucket/` endpoints, run against the
//! in-memory object store. The database is never touched.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_app_with_storage, delete_json, lazy_pool, post_json};
use nftstore_storage::InMemoryObjectStorage;
use serde_json::json;

fn app(storage: &Arc<InMemoryObjectStorage>) -> axum::Router {
    build_test_app_with_storage(lazy_pool(), Arc::clone(storage))
}

#[tokio::test]
async fn test_create_bucket_returns_201() {
    let storage = Arc::new(InMemoryObjectStorage::new());

    let response = post_json(app(&storage), "/bucket/", json!({"bucket_name": "media"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["bucket_name"], "media");
    assert!(storage.bucket_exists("media").await);
}

#[tokio::test]
async fn test_create_existing_bucket_returns_storage_error() {
    let storage = Arc::new(InMemoryObjectStorage::new());
    post_json(app(&storage), "/bucket/", json!({"bucket_name": "media"})).await;

    let response = post_json(app(&storage), "/bucket/", json!({"bucket_name": "media"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("BucketAlreadyOwnedByYou"));
}

#[tokio::test]
async fn test_invalid_bucket_name_returns_storage_error() {
    let storage = Arc::new(InMemoryObjectStorage::new());

    let response = post_json(app(&storage), "/bucket/", json!({"bucket_name": "Not_Valid"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "STORAGE_ERROR");
    assert!(!storage.bucket_exists("Not_Valid").await);
}

#[tokio::test]
async fn test_missing_bucket_name_returns_400() {
    let storage = Arc::new(InMemoryObjectStorage::new());

    let response = post_json(app(&storage), "/bucket/", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["bucket_name"].is_array());

    let response = post_json(app(&storage), "/bucket/", json!({"bucket_name": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_delete_empties_then_removes_bucket() {
    let storage = Arc::new(InMemoryObjectStorage::with_page_size(2));
    post_json(app(&storage), "/bucket/", json!({"bucket_name": "media"})).await;
    for i in 0..5 {
        storage
            .put_object("media", &format!("product_image/{i}.png"))
            .await
            .unwrap();
    }

    let response = delete_json(app(&storage), "/bucket/", json!({"bucket_name": "media"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["bucket_name"], "media");
    assert_eq!(json["objects_deleted"], 5);
    assert!(!storage.bucket_exists("media").await);
}

#[tokio::test]
async fn test_delete_missing_bucket_returns_storage_error() {
    let storage = Arc::new(InMemoryObjectStorage::new());

    let response = delete_json(app(&storage), "/bucket/", json!({"bucket_name": "ghost"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert!(json["error"].as_str().unwrap().starts_with("NoSuchBucket"));
}
