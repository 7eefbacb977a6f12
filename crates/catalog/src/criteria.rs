use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::error::{CatalogError, CatalogResult};
use crate::parse::parse_delivery_fee;
use crate::types::PriceTier;

/// Fee option shown for "no upper bound".
pub const UNBOUNDED_FEE_OPTION: &str = "$5+";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeeCeiling {
    Max(f64),
    Unbounded,
}

impl FeeCeiling {
    /// Parses a fee dropdown option (`$1`, `$3`, `$5`, `$5+`).
    ///
    /// Text without a `$<number>` has no finite limit and is treated as unbounded.
    pub fn parse(option: &str) -> Self {
        if option == UNBOUNDED_FEE_OPTION {
            return Self::Unbounded;
        }

        let limit = parse_delivery_fee(option);
        if limit.is_finite() {
            Self::Max(limit)
        } else {
            Self::Unbounded
        }
    }

    pub fn admits(self, fee: f64) -> bool {
        match self {
            Self::Max(limit) => fee <= limit,
            Self::Unbounded => true,
        }
    }
}

#[derive(
    EnumString, Display, AsRefStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum SortKey {
    /// Cheapest delivery first.
    #[strum(serialize = "Delivery Fee")]
    DeliveryFee,
    /// Best rated first.
    Rating,
    /// Lowest price tier first.
    Price,
}

impl SortKey {
    pub fn from_label(label: &str) -> CatalogResult<Self> {
        Self::from_str(label).map_err(|_| CatalogError::UnknownSortKey(label.to_owned()))
    }
}

/// How a cuisine selection combines with the search term.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CuisineScope {
    /// Cuisine is one more AND-ed filter on the search result.
    #[default]
    Narrow,
    /// A selected cuisine restarts from the full catalog, dropping the search term.
    Rebase,
}

/// One query against the catalog. `None` / empty means "do not filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub cuisine: Option<String>,
    pub max_delivery_fee: Option<FeeCeiling>,
    pub min_rating: Option<f64>,
    pub price_tier: Option<PriceTier>,
    pub sort_key: Option<SortKey>,
    pub cuisine_scope: CuisineScope,
}

impl FilterCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.cuisine.is_none()
            && self.max_delivery_fee.is_none()
            && self.min_rating.is_none()
            && self.price_tier.is_none()
    }
}

/// Parses a price dropdown option: a run of one to four `$`.
pub fn parse_price_option(option: &str) -> CatalogResult<PriceTier> {
    if option.is_empty() || !option.chars().all(|c| c == '$') {
        return Err(CatalogError::InvalidPriceFilter(option.to_owned()));
    }

    u8::try_from(option.len())
        .ok()
        .and_then(|level| PriceTier::try_from(level).ok())
        .ok_or_else(|| CatalogError::InvalidPriceFilter(option.to_owned()))
}
