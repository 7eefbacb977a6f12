use taste_tailor_catalog::{Catalog, MenuItem, PriceTier};

pub fn sample_items() -> Vec<MenuItem> {
    serde_json::from_str(include_str!("../../../../data/catalog.json"))
        .expect("sample catalog is valid JSON")
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_items()).expect("sample catalog is valid")
}

pub fn menu_item(id: u32, name: &str, delivery_fee: &str, rating: f64) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        cuisine: "Test".to_string(),
        rating,
        reviews: String::new(),
        delivery_fee: delivery_fee.to_string(),
        image_url: String::new(),
        price_tier: PriceTier::try_from(1).unwrap(),
        description: String::new(),
        actual_price: 9.5,
        tastes: vec![],
        recommended: vec![],
    }
}

pub fn ids(items: &[&MenuItem]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}

/// True when `needle` appears in `haystack` in the same relative order.
pub fn is_subsequence(needle: &[u32], haystack: &[u32]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|id| rest.any(|candidate| candidate == id))
}
