//! Route definitions for listing categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET    /category/         -> list
/// POST   /category/         -> create
/// GET    /category/{id}/    -> get_by_id
/// PUT    /category/{id}/    -> update
/// DELETE /category/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/category/", get(category::list).post(category::create))
        .route(
            "/category/{id}/",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
}
