//! Object storage adapter for bucket management.
//!
//! The HTTP layer only talks to [`ObjectStorage`]. Production wires in
//! [`S3ObjectStorage`], which targets any S3-compatible endpoint; tests use
//! [`InMemoryObjectStorage`].

pub mod config;
pub mod error;
pub mod memory;
pub mod s3;

use async_trait::async_trait;

pub use config::StorageConfig;
pub use error::StorageError;
pub use memory::InMemoryObjectStorage;
pub use s3::S3ObjectStorage;

/// One page of object keys from a bucket listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectPage {
    pub keys: Vec<String>,
    /// Token for the next page, `None` on the last page.
    pub next_token: Option<String>,
}

/// Bucket operations against an S3-compatible object store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Create an empty bucket.
    async fn create_bucket(&self, bucket: &str) -> Result<(), StorageError>;

    /// List one page of object keys, starting after `continuation`.
    async fn list_objects(
        &self,
        bucket: &str,
        continuation: Option<String>,
    ) -> Result<ObjectPage, StorageError>;

    /// Delete a batch of objects. At most 1000 keys per call.
    async fn delete_objects(&self, bucket: &str, keys: &[String]) -> Result<(), StorageError>;

    /// Delete a bucket. Fails if the bucket still holds objects.
    async fn delete_bucket(&self, bucket: &str) -> Result<(), StorageError>;

    /// Remove every object in `bucket`, then the bucket itself.
    ///
    /// Returns the number of objects removed.
    async fn empty_and_delete_bucket(&self, bucket: &str) -> Result<usize, StorageError> {
        let mut removed = 0;
        let mut continuation = None;

        loop {
            let page = self.list_objects(bucket, continuation).await?;
            if !page.keys.is_empty() {
                self.delete_objects(bucket, &page.keys).await?;
                removed += page.keys.len();
            }
            match page.next_token {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        self.delete_bucket(bucket).await?;
        tracing::debug!(bucket, removed, "Bucket emptied and deleted");
        Ok(removed)
    }
}
