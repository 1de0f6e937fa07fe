//! Repository for the `price_types` table.

use nftstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::price_type::{CreatePriceType, PriceType};

/// Column list for price_types queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for price types.
pub struct PriceTypeRepo;

impl PriceTypeRepo {
    /// Whether a price type with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM price_types WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Create a new price type, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePriceType) -> Result<PriceType, sqlx::Error> {
        let query = format!("INSERT INTO price_types (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, PriceType>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Delete a price type by ID, cascading to the listings priced with it.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM price_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
