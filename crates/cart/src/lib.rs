pub mod cart;
pub mod checkout;
pub mod error;

pub use cart::{Cart, CartItem, LineSelection};
pub use checkout::{CheckoutPricing, CheckoutSummary, DEFAULT_DELIVERY_FEE, DEFAULT_VAT_RATE};
pub use error::{CartError, CartResult};
