//! Route definitions for marketplace listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::listing;
use crate::state::AppState;

/// Listing routes.
///
/// ```text
/// GET    /nft/          -> list (?min_price, max_price, category, page)
/// POST   /nft/          -> create
/// GET    /nft/{id}/     -> get_by_id
/// PUT    /nft/{id}/     -> update
/// DELETE /nft/{id}/     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/nft/", get(listing::list).post(listing::create))
        .route(
            "/nft/{id}/",
            get(listing::get_by_id)
                .put(listing::update)
                .delete(listing::delete),
        )
}
