//! Route definitions for object storage buckets.

use axum::routing::post;
use axum::Router;

use crate::handlers::bucket;
use crate::state::AppState;

/// Bucket routes.
///
/// ```text
/// POST   /bucket/    -> create
/// DELETE /bucket/    -> delete (empties the bucket first)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/bucket/", post(bucket::create).delete(bucket::delete))
}
