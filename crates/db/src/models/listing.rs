//! Marketplace listing ("NFT") model.

use nftstore_core::types::{DbId, Timestamp};
use nftstore_core::validation::{validate_not_blank, validate_price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `listings` table.
///
/// `price` serializes as a decimal string (`"12.50"`) so no precision is
/// lost in transit.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Listing {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub name: String,
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    #[schema(value_type = Option<i64>)]
    pub price_type_id: Option<DbId>,
    pub image: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<DbId>,
    pub author: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for creating a listing.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateListing {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: String,
    /// Decimal string or JSON number, at most two decimal places.
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    #[schema(value_type = Option<i64>)]
    pub price_type_id: Option<DbId>,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<DbId>,
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub author: String,
}

/// DTO for a partial listing update. Absent fields are left unchanged.
///
/// The nullable columns use a double `Option`: the outer level records
/// whether the field was sent at all, so an explicit `null` clears the
/// column while an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateListing {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = Option<String>, example = "12.50")]
    pub price: Option<Decimal>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i64>)]
    pub price_type_id: Option<Option<DbId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 255))]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<DbId>>,
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub author: Option<String>,
}

/// Split a double `Option` into the "field was sent" flag and its value.
pub(crate) fn presence<T: Clone>(field: &Option<Option<T>>) -> (bool, Option<T>) {
    (field.is_some(), field.clone().flatten())
}
