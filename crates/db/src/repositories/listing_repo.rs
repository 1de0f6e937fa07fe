//! Repository for the `listings` table.

use nftstore_core::filter::ListingFilter;
use nftstore_core::pagination::PageRequest;
use nftstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing::{presence, CreateListing, Listing, UpdateListing};

/// Column list for listings queries.
const COLUMNS: &str = "id, name, price, price_type_id, image, category_id, author, \
    created_at, updated_at";

/// Column list qualified with the `l` alias, for joined queries.
const COLUMNS_L: &str = "l.id, l.name, l.price, l.price_type_id, l.image, l.category_id, \
    l.author, l.created_at, l.updated_at";

/// Shared `FROM ... WHERE` clause for filtered listing queries.
///
/// `$1` min price, `$2` max price, `$3` category name (case-insensitive).
const FILTERED_FROM: &str = "\
    FROM listings l \
    LEFT JOIN categories c ON c.id = l.category_id \
    WHERE ($1::NUMERIC IS NULL OR l.price >= $1) \
      AND ($2::NUMERIC IS NULL OR l.price <= $2) \
      AND ($3::TEXT IS NULL OR LOWER(c.name) = LOWER($3))";

/// Provides CRUD and filtered listing queries.
pub struct ListingRepo;

impl ListingRepo {
    /// Count listings matching `filter`.
    pub async fn count_filtered(pool: &PgPool, filter: &ListingFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) {FILTERED_FROM}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.category.as_deref())
            .fetch_one(pool)
            .await
    }

    /// One page of listings matching `filter`, ordered by id ascending.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &ListingFilter,
        page: PageRequest,
    ) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS_L} {FILTERED_FROM} \
             ORDER BY l.id ASC \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.category.as_deref())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Find a listing by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = $1");
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new listing, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateListing) -> Result<Listing, sqlx::Error> {
        let query = format!(
            "INSERT INTO listings (name, price, price_type_id, image, category_id, author)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.price_type_id)
            .bind(&input.image)
            .bind(input.category_id)
            .bind(&input.author)
            .fetch_one(pool)
            .await
    }

    /// Whether a listing with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM listings WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Update a listing by ID, returning the updated row.
    ///
    /// `None` fields are left unchanged. The nullable columns carry a
    /// presence flag so an explicit `null` clears them. Returns `None` if no
    /// row with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateListing,
    ) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!(
            "UPDATE listings SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                price_type_id = CASE WHEN $4 THEN $5 ELSE price_type_id END,
                image = CASE WHEN $6 THEN $7 ELSE image END,
                category_id = CASE WHEN $8 THEN $9 ELSE category_id END,
                author = COALESCE($10, author)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let (set_price_type, price_type_id) = presence(&input.price_type_id);
        let (set_image, image) = presence(&input.image);
        let (set_category, category_id) = presence(&input.category_id);

        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(set_price_type)
            .bind(price_type_id)
            .bind(set_image)
            .bind(image)
            .bind(set_category)
            .bind(category_id)
            .bind(&input.author)
            .fetch_optional(pool)
            .await
    }

    /// Delete a listing by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
