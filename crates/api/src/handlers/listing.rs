//! Handlers for the `/nft/` resource.

use axum::extract::State;
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use nftstore_core::error::{CoreError, Entity};
use nftstore_core::filter::{ListingFilter, RawListingQuery};
use nftstore_core::pagination::{Page, PageRequest, PageUrl};
use nftstore_core::types::DbId;
use nftstore_core::validation::missing_reference;
use nftstore_db::models::listing::{CreateListing, Listing, UpdateListing};
use nftstore_db::repositories::{CategoryRepo, ListingRepo, PriceTypeRepo};
use nftstore_db::DbPool;
use validator::ValidationErrors;

use crate::doc::{ErrorBody, ListingPage};
use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, DeferredJson, ValidatedJson};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: Entity::Listing,
        id,
    })
}

/// Reject references to categories or price types that do not exist.
async fn check_references(
    pool: &DbPool,
    category_id: Option<DbId>,
    price_type_id: Option<DbId>,
) -> AppResult<()> {
    let mut errors = ValidationErrors::new();

    if let Some(id) = category_id {
        if !CategoryRepo::exists(pool, id).await? {
            errors.add("category_id", missing_reference(id));
        }
    }
    if let Some(id) = price_type_id {
        if !PriceTypeRepo::exists(pool, id).await? {
            errors.add("price_type_id", missing_reference(id));
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Filtered listings ordered by id, eight per page.
///
/// Malformed filter or page values never fail the request.
#[utoipa::path(
    get,
    path = "/nft/",
    tag = "nft",
    params(RawListingQuery),
    responses(
        (status = 200, description = "One page of listings", body = ListingPage),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> AppResult<Json<Page<Listing>>> {
    let params = RawListingQuery::from_query(uri.query());
    let filter = ListingFilter::from_params(&params);
    let page = PageRequest::from_param(params.page.as_deref());

    let total_items = ListingRepo::count_filtered(&state.pool, &filter).await?;
    let results = ListingRepo::list_filtered(&state.pool, &filter, page).await?;

    tracing::debug!(
        ?filter,
        page = page.number(),
        total_items,
        "Listings queried"
    );

    let host = headers.get(HOST).and_then(|v| v.to_str().ok());
    let url = PageUrl::new(host, uri.path(), uri.query());
    Ok(Json(Page::new(page, total_items, results, &url)))
}

#[utoipa::path(
    post,
    path = "/nft/",
    tag = "nft",
    request_body = CreateListing,
    responses(
        (status = 201, description = "Listing created", body = Listing),
        (status = 400, description = "Invalid body or field errors", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateListing>,
) -> AppResult<(StatusCode, Json<Listing>)> {
    check_references(&state.pool, input.category_id, input.price_type_id).await?;

    let listing = ListingRepo::create(&state.pool, &input).await?;

    tracing::info!(
        listing_id = listing.id,
        name = %listing.name,
        "Listing created"
    );

    Ok((StatusCode::CREATED, Json(listing)))
}

#[utoipa::path(
    get,
    path = "/nft/{id}/",
    tag = "nft",
    params(("id" = i64, Path, description = "Listing id")),
    responses(
        (status = 200, description = "The listing", body = Listing),
        (status = 404, description = "NFT не найдена", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Listing>> {
    let listing = ListingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(listing))
}

/// Partial update: only the fields present in the body change, and an
/// explicit `null` clears a nullable field.
#[utoipa::path(
    put,
    path = "/nft/{id}/",
    tag = "nft",
    params(("id" = i64, Path, description = "Listing id")),
    request_body = UpdateListing,
    responses(
        (status = 200, description = "Updated listing", body = Listing),
        (status = 400, description = "Invalid body or field errors", body = ErrorBody),
        (status = 404, description = "NFT не найдена", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: DeferredJson,
) -> AppResult<Json<Listing>> {
    if !ListingRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    let input: UpdateListing = body.validated()?;
    check_references(
        &state.pool,
        input.category_id.flatten(),
        input.price_type_id.flatten(),
    )
    .await?;

    let listing = ListingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(listing_id = id, "Listing updated");

    Ok(Json(listing))
}

#[utoipa::path(
    delete,
    path = "/nft/{id}/",
    tag = "nft",
    params(("id" = i64, Path, description = "Listing id")),
    responses(
        (status = 204, description = "success"),
        (status = 404, description = "NFT не найдена", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ListingRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(listing_id = id, "Listing deleted");

    // Hyper strips the body from a 204 on the wire.
    Ok((StatusCode::NO_CONTENT, Json("success")))
}
