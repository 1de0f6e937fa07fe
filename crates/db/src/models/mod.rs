//! Catalog model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - An update DTO for `PUT` requests, where the entity supports one

pub mod category;
pub mod listing;
pub mod price_type;
