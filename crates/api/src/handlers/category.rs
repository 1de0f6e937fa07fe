//! Handlers for the `/category/` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nftstore_core::error::{CoreError, Entity};
use nftstore_core::types::DbId;
use nftstore_db::models::category::{Category, CreateCategory, UpdateCategory};
use nftstore_db::repositories::CategoryRepo;

use crate::doc::ErrorBody;
use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, DeferredJson, ValidatedJson};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: Entity::Category,
        id,
    })
}

#[utoipa::path(
    get,
    path = "/category/",
    tag = "category",
    responses((status = 200, description = "All categories ordered by id", body = [Category]))
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "/category/",
    tag = "category",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid body or field errors", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    get,
    path = "/category/{id}/",
    tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 404, description = "Категория не найдена", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// Full replacement: every field must be supplied.
#[utoipa::path(
    put,
    path = "/category/{id}/",
    tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Updated category", body = Category),
        (status = 400, description = "Invalid body or field errors", body = ErrorBody),
        (status = 404, description = "Категория не найдена", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: DeferredJson,
) -> AppResult<Json<Category>> {
    if !CategoryRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    let input: UpdateCategory = body.validated()?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// Refused with 409 while any listing still belongs to the category.
#[utoipa::path(
    delete,
    path = "/category/{id}/",
    tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "success"),
        (status = 404, description = "Категория не найдена", body = ErrorBody),
        (status = 409, description = "Category still has listings", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = match CategoryRepo::delete(&state.pool, id).await {
        Ok(deleted) => deleted,
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            tracing::warn!(category_id = id, "Refused to delete category in use");
            return Err(AppError::Core(CoreError::Conflict(
                "Category is referenced by existing listings".to_string(),
            )));
        }
        Err(err) => return Err(err.into()),
    };

    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok((StatusCode::NO_CONTENT, Json("success")))
}
