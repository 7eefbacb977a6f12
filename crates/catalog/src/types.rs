use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::parse::parse_delivery_fee;

/// Cost bracket of a menu item, shown as a run of `$` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceTier(u8);

impl PriceTier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn level(self) -> u8 {
        self.0
    }

    /// Display form, e.g. `$$` for tier 2.
    pub fn symbol(self) -> String {
        "$".repeat(self.0 as usize)
    }
}

impl TryFrom<u8> for PriceTier {
    type Error = CatalogError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(CatalogError::InvalidPriceTier(level))
        }
    }
}

impl From<PriceTier> for u8 {
    fn from(tier: PriceTier) -> Self {
        tier.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    #[serde(default)]
    pub reviews: String,
    /// Free text such as `$2.50 Delivery Fee`.
    pub delivery_fee: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(rename = "priceLevel")]
    pub price_tier: PriceTier,
    #[serde(default)]
    pub description: String,
    pub actual_price: f64,
    #[serde(default)]
    pub tastes: Vec<String>,
    #[serde(default)]
    pub recommended: Vec<String>,
}

impl MenuItem {
    /// Numeric delivery fee, `f64::INFINITY` when the text carries no `$<number>`.
    pub fn delivery_fee_amount(&self) -> f64 {
        parse_delivery_fee(&self.delivery_fee)
    }
}
