pub mod bucket;
pub mod category;
pub mod health;
pub mod listing;
pub mod price_type;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /nft/                    list (filtered, paginated), create
/// /nft/{id}/               get, update (partial), delete
///
/// /category/               list, create
/// /category/{id}/          get, update (full), delete
///
/// /typeprice/              create
///
/// /bucket/                 create, delete (body: {"bucket_name": ...})
/// ```
///
/// Paths keep their trailing slash, so each resource router declares full
/// paths and is merged rather than nested.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Marketplace listings.
        .merge(listing::router())
        // Listing categories.
        .merge(category::router())
        // Price types.
        .merge(price_type::router())
        // Object storage buckets.
        .merge(bucket::router())
}
