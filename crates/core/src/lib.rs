//! Domain types and pure logic shared by the nftstore crates.
//!
//! Nothing in here touches the database or the network: query parameter
//! parsing, page math, and field validation rules live here so they can be
//! unit-tested in isolation.

pub mod error;
pub mod filter;
pub mod pagination;
pub mod types;
pub mod validation;
