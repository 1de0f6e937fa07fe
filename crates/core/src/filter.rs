//! Listing filter parameters (`?min_price=&max_price=&category=`).
//!
//! Query values arrive as raw strings so that malformed input never rejects
//! the request. A repeated parameter keeps its last value. If any supplied
//! price fails to parse, the whole filter set is dropped and the unfiltered
//! collection is returned.

use std::str::FromStr;

use rust_decimal::Decimal;
use utoipa::IntoParams;

/// Raw query string of the listing collection endpoint.
///
/// Every field is kept as text; interpretation happens in
/// [`ListingFilter::from_params`] and
/// [`PageRequest::from_param`](crate::pagination::PageRequest::from_param).
#[derive(Debug, Default, Clone, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RawListingQuery {
    /// Minimum price, inclusive.
    #[param(example = "10.00")]
    pub min_price: Option<String>,
    /// Maximum price, inclusive.
    #[param(example = "250.00")]
    pub max_price: Option<String>,
    /// Category name, matched case-insensitively.
    pub category: Option<String>,
    /// 1-based page number, eight listings per page.
    pub page: Option<String>,
}

impl RawListingQuery {
    /// Parse a raw `application/x-www-form-urlencoded` query string.
    ///
    /// Unknown keys are ignored; for repeated keys the last value wins.
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default();

        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "min_price" => &mut raw.min_price,
                "max_price" => &mut raw.max_price,
                "category" => &mut raw.category,
                "page" => &mut raw.page,
                _ => continue,
            };
            *slot = Some(value);
        }
        raw
    }
}

/// Parsed listing predicate. Absent fields do not constrain the result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListingFilter {
    /// Keep listings with `price >= min_price`.
    pub min_price: Option<Decimal>,
    /// Keep listings with `price <= max_price`.
    pub max_price: Option<Decimal>,
    /// Case-insensitive exact match on the category name.
    pub category: Option<String>,
}

impl ListingFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Values are trimmed and blank values count as absent. An unparseable
    /// price invalidates the whole set and yields the empty filter.
    pub fn from_params(params: &RawListingQuery) -> Self {
        let (Ok(min_price), Ok(max_price)) = (
            parse_price(params.min_price.as_deref()),
            parse_price(params.max_price.as_deref()),
        ) else {
            return Self::default();
        };

        Self {
            min_price,
            max_price,
            category: non_blank(params.category.as_deref()).map(str::to_string),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// `Ok(None)` for an absent or blank value, `Err` for one that is not a
/// decimal number.
fn parse_price(raw: Option<&str>) -> Result<Option<Decimal>, rust_decimal::Error> {
    non_blank(raw).map(Decimal::from_str).transpose()
}
