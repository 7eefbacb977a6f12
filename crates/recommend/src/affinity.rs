use std::collections::BTreeMap;

use crate::types::PastOrderRecord;

/// Ratings at or above this count toward a tag's affinity.
pub const HIGH_AFFINITY_RATING: u8 = 3;

/// Per taste tag, the highest rating among that tag's orders rated 3 or more.
///
/// Tags seen only on orders rated below 3 (or unrated) score `0`. Tags that
/// never occur on an order are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasteAffinityIndex {
    scores: BTreeMap<String, u8>,
}

impl TasteAffinityIndex {
    pub fn build(orders: &[PastOrderRecord]) -> Self {
        let mut scores = BTreeMap::new();

        for order in orders {
            for tag in &order.taste_tags {
                let score = scores.entry(tag.clone()).or_insert(0);
                if order.rating >= HIGH_AFFINITY_RATING {
                    *score = (*score).max(order.rating);
                }
            }
        }

        Self { scores }
    }

    pub fn score(&self, tag: &str) -> Option<u8> {
        self.scores.get(tag).copied()
    }

    pub fn is_high_affinity(&self, tag: &str) -> bool {
        self.score(tag)
            .is_some_and(|score| score >= HIGH_AFFINITY_RATING)
    }

    /// Tags by descending score; equal scores in alphabetical order.
    pub fn ranked_tags(&self) -> Vec<&str> {
        let mut tags: Vec<(&str, u8)> = self
            .scores
            .iter()
            .map(|(tag, score)| (tag.as_str(), *score))
            .collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1));
        tags.into_iter().map(|(tag, _)| tag).collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
