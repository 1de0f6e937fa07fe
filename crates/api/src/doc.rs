//! OpenAPI documentation for the HTTP surface.
//!
//! [`ApiDoc`] collects every `#[utoipa::path]` handler and the request and
//! response schemas. The router serves it as JSON at
//! `/api-docs/openapi.json` with Swagger UI at `/docs`.

use std::collections::BTreeMap;

use nftstore_db::models::category::{Category, CreateCategory, UpdateCategory};
use nftstore_db::models::listing::{CreateListing, Listing, UpdateListing};
use nftstore_db::models::price_type::{CreatePriceType, PriceType};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::handlers::bucket::{BucketCreated, BucketDeleted, BucketRequest};
use crate::routes::health::HealthResponse;

/// Error envelope produced by [`AppError`](crate::error::AppError).
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message (localized for missing resources).
    #[schema(example = "NFT не найдена")]
    pub error: String,
    /// Machine-readable error code.
    #[schema(example = "NOT_FOUND")]
    pub code: String,
    /// Per-field messages, present on validation failures only.
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

/// Paginated listing envelope returned by `GET /nft/`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingPage {
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i64,
    /// Absolute link to the next page, `null` on the last page.
    pub next: Option<String>,
    /// Absolute link to the previous page, `null` on the first page.
    pub previous: Option<String>,
    pub results: Vec<Listing>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "nftstore API",
        description = "Marketplace catalog: listings, categories, price types and storage buckets."
    ),
    paths(
        crate::handlers::listing::list,
        crate::handlers::listing::create,
        crate::handlers::listing::get_by_id,
        crate::handlers::listing::update,
        crate::handlers::listing::delete,
        crate::handlers::category::list,
        crate::handlers::category::create,
        crate::handlers::category::get_by_id,
        crate::handlers::category::update,
        crate::handlers::category::delete,
        crate::handlers::price_type::create,
        crate::handlers::bucket::create,
        crate::handlers::bucket::delete,
        crate::routes::health::health_check,
    ),
    components(schemas(
        Listing,
        CreateListing,
        UpdateListing,
        ListingPage,
        Category,
        CreateCategory,
        UpdateCategory,
        PriceType,
        CreatePriceType,
        BucketRequest,
        BucketCreated,
        BucketDeleted,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "nft", description = "Marketplace listings"),
        (name = "category", description = "Listing categories"),
        (name = "typeprice", description = "Price types"),
        (name = "bucket", description = "Object storage buckets"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/nft/",
            "/nft/{id}/",
            "/category/",
            "/category/{id}/",
            "/typeprice/",
            "/bucket/",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn listing_collection_documents_filters() {
        let doc = ApiDoc::openapi();
        let get = doc.paths.paths["/nft/"].get.as_ref().expect("GET /nft/");
        let names: Vec<&str> = get
            .parameters
            .iter()
            .flatten()
            .map(|p| p.name.as_str())
            .collect();
        for name in ["min_price", "max_price", "category", "page"] {
            assert!(names.contains(&name), "missing parameter {name}");
        }
    }

    #[test]
    fn listing_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let listing = schemas.get("Listing").expect("Listing schema");
        for field in ["id", "name", "price", "category_id", "author", "created_at"] {
            assert_object_schema_has_field(listing, field);
        }
    }

    #[test]
    fn error_schema_has_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("ErrorBody").expect("ErrorBody schema");
        assert_object_schema_has_field(error, "error");
        assert_object_schema_has_field(error, "code");
    }
}
