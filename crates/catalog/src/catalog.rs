use std::collections::HashMap;

use crate::criteria::FilterCriteria;
use crate::error::{CatalogError, CatalogResult};
use crate::query::query;
use crate::types::MenuItem;

/// Menu items for one session, validated on construction and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
    positions: HashMap<u32, usize>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> CatalogResult<Self> {
        let mut positions = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if !(0.0..=5.0).contains(&item.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: item.id,
                    rating: item.rating,
                });
            }

            if positions.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self { items, positions })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.positions.get(&id).map(|&position| &self.items[position])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct cuisines in catalog order.
    pub fn cuisines(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.cuisine.as_str()) {
                seen.push(item.cuisine.as_str());
            }
        }
        seen
    }

    pub fn query(&self, criteria: &FilterCriteria) -> Vec<&MenuItem> {
        query(&self.items, criteria)
    }
}

impl TryFrom<Vec<MenuItem>> for Catalog {
    type Error = CatalogError;

    fn try_from(items: Vec<MenuItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}
