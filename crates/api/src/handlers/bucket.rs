//! Handlers for the `/bucket/` resource (object storage buckets).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::doc::ErrorBody;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Request body for both bucket operations.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BucketRequest {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, max = 63)
    )]
    pub bucket_name: Option<String>,
}

impl BucketRequest {
    fn name(&self) -> AppResult<&str> {
        self.bucket_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest("bucket_name is required".to_string()))
    }
}

/// Response body for a created bucket.
#[derive(Debug, Serialize, ToSchema)]
pub struct BucketCreated {
    pub bucket_name: String,
}

/// Response body for a deleted bucket.
#[derive(Debug, Serialize, ToSchema)]
pub struct BucketDeleted {
    pub bucket_name: String,
    /// Objects removed before the bucket itself was deleted.
    pub objects_deleted: usize,
}

#[utoipa::path(
    post,
    path = "/bucket/",
    tag = "bucket",
    request_body = BucketRequest,
    responses(
        (status = 201, description = "Bucket created", body = BucketCreated),
        (status = 400, description = "Missing name or storage service error", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<BucketRequest>,
) -> AppResult<(StatusCode, Json<BucketCreated>)> {
    let name = input.name()?;

    state.storage.create_bucket(name).await.map_err(|err| {
        tracing::warn!(bucket = name, error = %err, "Bucket creation failed");
        AppError::from(err)
    })?;

    tracing::info!(bucket = name, "Bucket created");

    Ok((
        StatusCode::CREATED,
        Json(BucketCreated {
            bucket_name: name.to_string(),
        }),
    ))
}

/// Empties the bucket, then deletes it.
#[utoipa::path(
    delete,
    path = "/bucket/",
    tag = "bucket",
    request_body = BucketRequest,
    responses(
        (status = 200, description = "Bucket emptied and deleted", body = BucketDeleted),
        (status = 400, description = "Missing name or storage service error", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<BucketRequest>,
) -> AppResult<Json<BucketDeleted>> {
    let name = input.name()?;

    let objects_deleted = state
        .storage
        .empty_and_delete_bucket(name)
        .await
        .map_err(|err| {
            tracing::warn!(bucket = name, error = %err, "Bucket deletion failed");
            AppError::from(err)
        })?;

    tracing::info!(bucket = name, objects_deleted, "Bucket deleted");

    Ok(Json(BucketDeleted {
        bucket_name: name.to_string(),
        objects_deleted,
    }))
}
