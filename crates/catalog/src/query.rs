use std::cmp::Ordering;

use crate::criteria::{CuisineScope, FilterCriteria, SortKey};
use crate::types::MenuItem;

/// Filters and sorts the catalog for one set of criteria.
///
/// Filters run in order (search, cuisine, delivery fee, rating, price tier)
/// and combine with AND. Sorting is stable; without a sort key the catalog
/// order is kept.
pub fn query<'a>(catalog: &'a [MenuItem], criteria: &FilterCriteria) -> Vec<&'a MenuItem> {
    let needle = criteria.search_term.to_lowercase();
    let search_applies = !needle.is_empty()
        && !(criteria.cuisine_scope == CuisineScope::Rebase && criteria.cuisine.is_some());

    let mut matches: Vec<&MenuItem> = catalog
        .iter()
        .filter(|item| !search_applies || item.name.to_lowercase().contains(&needle))
        .filter(|item| {
            criteria
                .cuisine
                .as_deref()
                .is_none_or(|cuisine| item.cuisine == cuisine)
        })
        .filter(|item| {
            criteria
                .max_delivery_fee
                .is_none_or(|ceiling| ceiling.admits(item.delivery_fee_amount()))
        })
        .filter(|item| criteria.min_rating.is_none_or(|floor| item.rating >= floor))
        .filter(|item| criteria.price_tier.is_none_or(|tier| item.price_tier == tier))
        .collect();

    if let Some(key) = criteria.sort_key {
        matches.sort_by(|a, b| compare(a, b, key));
    }

    tracing::debug!(
        catalog = catalog.len(),
        matches = matches.len(),
        sort = ?criteria.sort_key,
        "catalog query"
    );

    matches
}

fn compare(a: &MenuItem, b: &MenuItem, key: SortKey) -> Ordering {
    match key {
        SortKey::DeliveryFee => a
            .delivery_fee_amount()
            .total_cmp(&b.delivery_fee_amount()),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Price => a.price_tier.cmp(&b.price_tier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::FeeCeiling;
    use crate::types::PriceTier;

    fn item(id: u32, name: &str, cuisine: &str, rating: f64, fee: &str, tier: u8) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            rating,
            reviews: String::new(),
            delivery_fee: fee.to_string(),
            image_url: String::new(),
            price_tier: PriceTier::try_from(tier).unwrap(),
            description: String::new(),
            actual_price: 10.0,
            tastes: vec![],
            recommended: vec![],
        }
    }

    fn ids(items: &[&MenuItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = vec![
            item(1, "Pad Thai Chicken Noodles", "Thai", 4.9, "$0.5", 2),
            item(2, "Pizza by the Slice", "Pizza", 4.5, "$3", 2),
            item(3, "Pork Cartilage Noodle Soup", "Chinese", 5.0, "$2", 2),
        ];
        let criteria = FilterCriteria {
            search_term: "NOODLE".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&query(&catalog, &criteria)), vec![1, 3]);
    }

    #[test]
    fn cuisine_match_is_exact() {
        let catalog = vec![
            item(1, "Latte", "Coffee", 5.0, "$0.99", 1),
            item(2, "Iced latte", "coffee", 4.0, "$0.99", 1),
        ];
        let criteria = FilterCriteria {
            cuisine: Some("Coffee".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(&query(&catalog, &criteria)), vec![1]);
    }

    #[test]
    fn fee_sort_puts_unparseable_last() {
        let catalog = vec![
            item(1, "a", "x", 4.0, "Free Delivery", 1),
            item(2, "b", "x", 4.0, "$2.99 Delivery Fee", 1),
            item(3, "c", "x", 4.0, "$0.5 Delivery Fee", 1),
        ];
        let criteria = FilterCriteria {
            sort_key: Some(SortKey::DeliveryFee),
            ..Default::default()
        };

        assert_eq!(ids(&query(&catalog, &criteria)), vec![3, 2, 1]);
    }

    #[test]
    fn price_sort_ascending() {
        let catalog = vec![
            item(1, "a", "x", 4.0, "$1", 3),
            item(2, "b", "x", 4.0, "$1", 1),
            item(3, "c", "x", 4.0, "$1", 2),
        ];
        let criteria = FilterCriteria {
            sort_key: Some(SortKey::Price),
            ..Default::default()
        };

        assert_eq!(ids(&query(&catalog, &criteria)), vec![2, 3, 1]);
    }

    #[test]
    fn rating_floor_is_inclusive() {
        let catalog = vec![
            item(1, "a", "x", 4.5, "$1", 1),
            item(2, "b", "x", 4.4, "$1", 1),
        ];
        let criteria = FilterCriteria {
            min_rating: Some(4.5),
            max_delivery_fee: Some(FeeCeiling::Max(1.0)),
            ..Default::default()
        };

        assert_eq!(ids(&query(&catalog, &criteria)), vec![1]);
    }
}
