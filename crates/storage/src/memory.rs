//! Process-local [`ObjectStorage`] used by tests and local development.
//!
//! Mirrors the S3 error codes the HTTP layer surfaces so handler behaviour
//! is identical against either backend.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::{ObjectPage, ObjectStorage};

/// Default number of keys returned per listing page.
const DEFAULT_PAGE_SIZE: usize = 1000;

pub struct InMemoryObjectStorage {
    buckets: Mutex<BTreeMap<String, BTreeSet<String>>>,
    page_size: usize,
}

impl Default for InMemoryObjectStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryObjectStorage {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Use a smaller listing page to exercise pagination.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            buckets: Mutex::new(BTreeMap::new()),
            page_size: page_size.max(1),
        }
    }

    /// Store an (empty) object under `key`.
    pub async fn put_object(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let mut buckets = self.buckets.lock().await;
        let objects = buckets.get_mut(bucket).ok_or_else(|| no_such_bucket(bucket))?;
        objects.insert(key.to_string());
        Ok(())
    }

    pub async fn bucket_exists(&self, bucket: &str) -> bool {
        self.buckets.lock().await.contains_key(bucket)
    }

    pub async fn object_count(&self, bucket: &str) -> usize {
        self.buckets
            .lock()
            .await
            .get(bucket)
            .map_or(0, BTreeSet::len)
    }
}

fn no_such_bucket(bucket: &str) -> StorageError {
    StorageError::service(
        "NoSuchBucket",
        format!("The specified bucket does not exist: {bucket}"),
    )
}

/// Check a name against the S3 bucket naming rules.
fn validate_bucket_name(bucket: &str) -> Result<(), StorageError> {
    let valid_chars = bucket
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.');
    let valid_edges = bucket
        .chars()
        .next()
        .zip(bucket.chars().last())
        .is_some_and(|(first, last)| first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric());

    if (3..=63).contains(&bucket.len()) && valid_chars && valid_edges {
        Ok(())
    } else {
        Err(StorageError::service(
            "InvalidBucketName",
            "The specified bucket is not valid.",
        ))
    }
}

#[async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn create_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        validate_bucket_name(bucket)?;
        let mut buckets = self.buckets.lock().await;
        if buckets.contains_key(bucket) {
            return Err(StorageError::service(
                "BucketAlreadyOwnedByYou",
                "Your previous request to create the named bucket succeeded and you already own it.",
            ));
        }
        buckets.insert(bucket.to_string(), BTreeSet::new());
        Ok(())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        continuation: Option<String>,
    ) -> Result<ObjectPage, StorageError> {
        let buckets = self.buckets.lock().await;
        let objects = buckets.get(bucket).ok_or_else(|| no_such_bucket(bucket))?;

        // The continuation token is the last key of the previous page.
        let mut remaining = objects
            .iter()
            .filter(|key| continuation.as_ref().map_or(true, |after| *key > after));

        let keys: Vec<String> = remaining.by_ref().take(self.page_size).cloned().collect();
        let next_token = match remaining.next() {
            Some(_) => keys.last().cloned(),
            None => None,
        };

        Ok(ObjectPage { keys, next_token })
    }

    async fn delete_objects(&self, bucket: &str, keys: &[String]) -> Result<(), StorageError> {
        let mut buckets = self.buckets.lock().await;
        let objects = buckets.get_mut(bucket).ok_or_else(|| no_such_bucket(bucket))?;
        for key in keys {
            objects.remove(key);
        }
        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        let mut buckets = self.buckets.lock().await;
        match buckets.get(bucket) {
            None => Err(no_such_bucket(bucket)),
            Some(objects) if !objects.is_empty() => Err(StorageError::service(
                "BucketNotEmpty",
                "The bucket you tried to delete is not empty",
            )),
            Some(_) => {
                buckets.remove(bucket);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn create_then_duplicate_fails() {
        let storage = InMemoryObjectStorage::new();
        storage.create_bucket("media").await.unwrap();

        let err = storage.create_bucket("media").await.unwrap_err();
        assert_matches!(err, StorageError::Service { ref code, .. } if code == "BucketAlreadyOwnedByYou");
    }

    #[tokio::test]
    async fn invalid_bucket_names_are_rejected() {
        let storage = InMemoryObjectStorage::new();
        for name in ["ab", "Upper", "-edge", "under_score"] {
            let err = storage.create_bucket(name).await.unwrap_err();
            assert_matches!(err, StorageError::Service { ref code, .. } if code == "InvalidBucketName");
        }
    }

    #[tokio::test]
    async fn non_empty_bucket_cannot_be_deleted_directly() {
        let storage = InMemoryObjectStorage::new();
        storage.create_bucket("media").await.unwrap();
        storage.put_object("media", "a.png").await.unwrap();

        let err = storage.delete_bucket("media").await.unwrap_err();
        assert_matches!(err, StorageError::Service { ref code, .. } if code == "BucketNotEmpty");
    }

    #[tokio::test]
    async fn listing_is_paginated() {
        let storage = InMemoryObjectStorage::with_page_size(2);
        storage.create_bucket("media").await.unwrap();
        for key in ["a", "b", "c"] {
            storage.put_object("media", key).await.unwrap();
        }

        let first = storage.list_objects("media", None).await.unwrap();
        assert_eq!(first.keys, ["a", "b"]);
        assert_eq!(first.next_token.as_deref(), Some("b"));

        let second = storage.list_objects("media", first.next_token).await.unwrap();
        assert_eq!(second.keys, ["c"]);
        assert!(second.next_token.is_none());
    }

    #[tokio::test]
    async fn empty_and_delete_removes_every_page() {
        let storage = InMemoryObjectStorage::with_page_size(2);
        storage.create_bucket("media").await.unwrap();
        for key in ["a", "b", "c", "d", "e"] {
            storage.put_object("media", key).await.unwrap();
        }

        let removed = storage.empty_and_delete_bucket("media").await.unwrap();

        assert_eq!(removed, 5);
        assert!(!storage.bucket_exists("media").await);
    }

    #[tokio::test]
    async fn empty_and_delete_missing_bucket_fails() {
        let storage = InMemoryObjectStorage::new();
        let err = storage.empty_and_delete_bucket("ghost").await.unwrap_err();
        assert_matches!(err, StorageError::Service { ref code, .. } if code == "NoSuchBucket");
    }
}
