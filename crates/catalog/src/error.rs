use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate menu item id: {0}")]
    DuplicateId(u32),

    #[error("Menu item {id} has rating {rating}, expected a value between 0 and 5")]
    RatingOutOfRange { id: u32, rating: f64 },

    #[error("Invalid price tier: {0} (expected 1 to 4)")]
    InvalidPriceTier(u8),

    #[error("Invalid price filter '{0}': expected one to four '$' characters")]
    InvalidPriceFilter(String),

    #[error("Unknown sort option: {0}")]
    UnknownSortKey(String),
}
