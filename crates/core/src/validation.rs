//! Field rules shared by the catalog DTOs.
//!
//! These are plugged into `#[derive(Validate)]` via
//! `#[validate(custom(function = "..."))]` and mirror the column
//! constraints in the database schema (`VARCHAR(255)`, `NUMERIC(10,2)`).

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::types::DbId;

/// Maximum length of every text column.
pub const MAX_TEXT_LEN: u64 = 255;

/// Total significant digits allowed in a price.
pub const PRICE_MAX_DIGITS: u32 = 10;

/// Digits allowed after the decimal point in a price.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

fn error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

/// Reject strings that are empty after trimming whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "This field may not be blank.".to_string()));
    }
    Ok(())
}

/// A price must be non-negative and fit `NUMERIC(10,2)`.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(error(
            "min_value",
            "Ensure this value is greater than or equal to 0.".to_string(),
        ));
    }

    if price.normalize().scale() > PRICE_DECIMAL_PLACES {
        return Err(error(
            "max_decimal_places",
            format!("Ensure that there are no more than {PRICE_DECIMAL_PLACES} decimal places."),
        ));
    }

    let whole_digits = PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES;
    let limit = Decimal::from(10_i64.pow(whole_digits));
    if price.trunc() >= limit {
        return Err(error(
            "max_whole_digits",
            format!("Ensure that there are no more than {whole_digits} digits before the decimal point."),
        ));
    }

    Ok(())
}

/// Field error for a foreign key pointing at a row that does not exist.
pub fn missing_reference(id: DbId) -> ValidationError {
    error(
        "does_not_exist",
        format!("Invalid pk \"{id}\" - object does not exist."),
    )
}
