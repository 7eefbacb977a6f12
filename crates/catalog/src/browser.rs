use crate::catalog::Catalog;
use crate::criteria::{CuisineScope, FeeCeiling, FilterCriteria, SortKey};
use crate::types::{MenuItem, PriceTier};

/// Restaurant list state shared by the search box, filter chips and sort menu.
///
/// Every setter recomputes the visible list, so readers never observe
/// criteria and results out of step.
#[derive(Debug, Clone)]
pub struct RestaurantBrowser {
    catalog: Catalog,
    criteria: FilterCriteria,
    visible: Vec<u32>,
}

impl RestaurantBrowser {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    pub fn with_criteria(catalog: Catalog, criteria: FilterCriteria) -> Self {
        let mut browser = Self {
            catalog,
            criteria,
            visible: Vec::new(),
        };
        browser.refresh();
        browser
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible(&self) -> Vec<&MenuItem> {
        self.visible
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn cuisines(&self) -> Vec<&str> {
        self.catalog.cuisines()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.refresh();
    }

    pub fn set_cuisine(&mut self, cuisine: Option<String>) {
        self.criteria.cuisine = cuisine;
        self.refresh();
    }

    pub fn set_max_delivery_fee(&mut self, ceiling: Option<FeeCeiling>) {
        self.criteria.max_delivery_fee = ceiling;
        self.refresh();
    }

    pub fn set_min_rating(&mut self, floor: Option<f64>) {
        self.criteria.min_rating = floor;
        self.refresh();
    }

    pub fn set_price_tier(&mut self, tier: Option<PriceTier>) {
        self.criteria.price_tier = tier;
        self.refresh();
    }

    pub fn set_sort_key(&mut self, key: Option<SortKey>) {
        self.criteria.sort_key = key;
        self.refresh();
    }

    pub fn set_cuisine_scope(&mut self, scope: CuisineScope) {
        self.criteria.cuisine_scope = scope;
        self.refresh();
    }

    /// Clears every filter and the sort key. The search term and cuisine scope stay.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria {
            search_term: std::mem::take(&mut self.criteria.search_term),
            cuisine_scope: self.criteria.cuisine_scope,
            ..Default::default()
        };
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = self
            .catalog
            .query(&self.criteria)
            .into_iter()
            .map(|item| item.id)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, cuisine: &str, rating: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            rating,
            reviews: String::new(),
            delivery_fee: "$2 Delivery Fee".to_string(),
            image_url: String::new(),
            price_tier: PriceTier::try_from(2).unwrap(),
            description: String::new(),
            actual_price: 12.0,
            tastes: vec![],
            recommended: vec![],
        }
    }

    fn browser() -> RestaurantBrowser {
        let catalog = Catalog::new(vec![
            item(1, "Pad Thai Chicken Noodles", "Thai", 4.9),
            item(2, "Pizza by the Slice", "Pizza", 4.5),
            item(3, "Green Curry", "Thai", 4.1),
        ])
        .unwrap();
        RestaurantBrowser::new(catalog)
    }

    fn visible_ids(browser: &RestaurantBrowser) -> Vec<u32> {
        browser.visible().iter().map(|item| item.id).collect()
    }

    #[test]
    fn starts_with_full_catalog() {
        assert_eq!(visible_ids(&browser()), vec![1, 2, 3]);
    }

    #[test]
    fn setters_recompute() {
        let mut browser = browser();

        browser.set_cuisine(Some("Thai".to_string()));
        assert_eq!(visible_ids(&browser), vec![1, 3]);

        browser.set_sort_key(Some(SortKey::Rating));
        browser.set_min_rating(Some(4.5));
        assert_eq!(visible_ids(&browser), vec![1]);

        browser.set_cuisine(None);
        assert_eq!(visible_ids(&browser), vec![1, 2]);
    }

    #[test]
    fn reset_keeps_search_term() {
        let mut browser = browser();
        browser.set_search_term("curry");
        browser.set_cuisine(Some("Pizza".to_string()));
        assert_eq!(browser.visible_count(), 0);

        browser.reset_filters();

        assert_eq!(browser.criteria().search_term, "curry");
        assert_eq!(visible_ids(&browser), vec![3]);
    }

    #[test]
    fn rebase_scope_ignores_search_when_cuisine_selected() {
        let mut browser = browser();
        browser.set_search_term("pizza");
        browser.set_cuisine(Some("Thai".to_string()));
        assert_eq!(browser.visible_count(), 0);

        browser.set_cuisine_scope(CuisineScope::Rebase);

        assert_eq!(visible_ids(&browser), vec![1, 3]);
    }
}
