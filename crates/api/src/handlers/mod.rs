//! Request handlers for the catalog and bucket endpoints.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `nftstore_db` (or
//! the object storage adapter) and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod bucket;
pub mod category;
pub mod listing;
pub mod price_type;
