use chrono::{DateTime, TimeZone, Utc};
use taste_tailor_recommend::PastOrderRecord;

pub fn delivered(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
}

pub fn past_order(
    id: u32,
    tags: &[&str],
    rating: u8,
    delivered_at: DateTime<Utc>,
) -> PastOrderRecord {
    PastOrderRecord {
        id,
        item_name: format!("Dish {id}"),
        image_url: Some(format!("/images/assets/dish_{id}.jpg")),
        quantity: 1,
        price_per_item: 12.5,
        delivered_at,
        taste_tags: tags.iter().map(|tag| tag.to_string()).collect(),
        recommended: vec![],
        rating,
        review_comment: None,
    }
}

pub fn sample_history() -> Vec<PastOrderRecord> {
    serde_json::from_str(include_str!("../../../../data/orders.json"))
        .expect("sample order history is valid JSON")
}

pub fn ids(orders: &[&PastOrderRecord]) -> Vec<u32> {
    orders.iter().map(|order| order.id).collect()
}
