use thiserror::Error;
use ulid::Ulid;

pub type CartResult<T> = Result<T, CartError>;

#[derive(Error, Debug, PartialEq)]
pub enum CartError {
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Cart cannot hold more than {} items", u32::MAX)]
    QuantityOverflow,

    #[error("Cart line {0} not found")]
    LineNotFound(Ulid),
}
