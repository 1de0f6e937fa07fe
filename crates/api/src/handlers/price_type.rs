//! Handlers for the `/typeprice/` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use nftstore_db::models::price_type::{CreatePriceType, PriceType};
use nftstore_db::repositories::PriceTypeRepo;

use crate::doc::ErrorBody;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/typeprice/",
    tag = "typeprice",
    request_body = CreatePriceType,
    responses(
        (status = 201, description = "Price type created", body = PriceType),
        (status = 400, description = "Invalid body or field errors", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePriceType>,
) -> AppResult<(StatusCode, Json<PriceType>)> {
    let price_type = PriceTypeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        price_type_id = price_type.id,
        name = %price_type.name,
        "Price type created"
    );

    Ok((StatusCode::CREATED, Json(price_type)))
}
