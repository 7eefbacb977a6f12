pub mod browser;
pub mod catalog;
pub mod criteria;
pub mod error;
pub mod parse;
pub mod query;
pub mod taste;
pub mod types;

pub use browser::RestaurantBrowser;
pub use catalog::Catalog;
pub use criteria::{
    parse_price_option, CuisineScope, FeeCeiling, FilterCriteria, SortKey,
    UNBOUNDED_FEE_OPTION,
};
pub use error::{CatalogError, CatalogResult};
pub use parse::{parse_delivery_fee, parse_rating_floor};
pub use query::query;
pub use taste::describe_taste;
pub use types::{MenuItem, PriceTier};
