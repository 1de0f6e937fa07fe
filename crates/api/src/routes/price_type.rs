use axum::routing::post;
use axum::Router;

use crate::handlers::price_type;
use crate::state::AppState;

/// Price type routes: `POST /typeprice/ -> create`.
pub fn router() -> Router<AppState> {
    Router::new().route("/typeprice/", post(price_type::create))
}
