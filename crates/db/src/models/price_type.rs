//! Price type model (the unit or currency a listing is priced in).

use nftstore_core::types::DbId;
use nftstore_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `price_types` table.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PriceType {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a price type.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePriceType {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: String,
}
