use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Highest rating a past order can carry. `0` means "not yet rated".
pub const MAX_RATING: u8 = 5;

/// One delivered line item from the user's order history.
///
/// Field aliases accept the order-history payload of the backend
/// (`taste_selection`, `delivered_date`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastOrderRecord {
    pub id: u32,
    pub item_name: String,
    #[serde(default, alias = "item_image_url")]
    pub image_url: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub price_per_item: f64,
    #[serde(alias = "delivered_date", deserialize_with = "deserialize_timestamp")]
    pub delivered_at: DateTime<Utc>,
    #[serde(default, alias = "taste_selection")]
    pub taste_tags: Vec<String>,
    #[serde(default, alias = "recommended_selection")]
    pub recommended: Vec<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub review_comment: Option<String>,
}

impl PastOrderRecord {
    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }

    pub fn total_price(&self) -> f64 {
        self.price_per_item * f64::from(self.quantity)
    }
}

fn default_quantity() -> u32 {
    1
}

/// RFC 3339, or a naive ISO timestamp taken as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid delivery timestamp '{raw}': {e}")))
}
