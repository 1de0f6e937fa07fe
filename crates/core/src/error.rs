use crate::types::DbId;

/// Catalog entity kinds, used to tag lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Listing,
    Category,
    PriceType,
}

impl Entity {
    /// Name used in logs and internal error text.
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Listing => "Listing",
            Entity::Category => "Category",
            Entity::PriceType => "PriceType",
        }
    }

    /// Client-facing "not found" message, localized for the storefront.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Entity::Listing => "NFT не найдена",
            Entity::Category => "Категория не найдена",
            Entity::PriceType => "Тип цены не найден",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: Entity, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
