use thiserror::Error;

pub type RecommendResult<T> = Result<T, RecommendError>;

#[derive(Error, Debug, PartialEq)]
pub enum RecommendError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Order {0} not found")]
    OrderNotFound(u32),

    #[error("Order {0} has already been reviewed")]
    AlreadyReviewed(u32),

    #[error("Duplicate order id: {0}")]
    DuplicateOrder(u32),

    #[error("Order {id} has rating {rating}, expected a value between 0 and 5")]
    RatingOutOfRange { id: u32, rating: u8 },
}
