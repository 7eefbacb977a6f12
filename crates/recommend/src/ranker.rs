use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::affinity::TasteAffinityIndex;
use crate::types::PastOrderRecord;

type RankKey = (usize, Reverse<bool>, Reverse<u8>, Reverse<DateTime<Utc>>);

/// Orders past orders for the "recommended for you" view.
///
/// Orders are grouped by their best taste tag (tags ranked by affinity),
/// then orders carrying a high-affinity tag come first, then higher
/// ratings, then more recent deliveries. Orders without tags follow every
/// tagged order. The sort is stable, so ranking a ranked list is a no-op.
pub fn rank(orders: &[PastOrderRecord]) -> Vec<&PastOrderRecord> {
    let index = TasteAffinityIndex::build(orders);
    let tag_rank: HashMap<&str, usize> = index
        .ranked_tags()
        .into_iter()
        .enumerate()
        .map(|(position, tag)| (tag, position))
        .collect();

    let mut ranked: Vec<&PastOrderRecord> = orders.iter().collect();
    ranked.sort_by_cached_key(|order| rank_key(order, &index, &tag_rank));

    tracing::debug!(
        orders = orders.len(),
        tags = index.len(),
        "ranked past orders"
    );

    ranked
}

fn rank_key(
    order: &PastOrderRecord,
    index: &TasteAffinityIndex,
    tag_rank: &HashMap<&str, usize>,
) -> RankKey {
    let best_tag = order
        .taste_tags
        .iter()
        .filter_map(|tag| tag_rank.get(tag.as_str()).copied())
        .min()
        .unwrap_or(tag_rank.len());
    let high_affinity = order
        .taste_tags
        .iter()
        .any(|tag| index.is_high_affinity(tag));

    (
        best_tag,
        Reverse(high_affinity),
        Reverse(order.rating),
        Reverse(order.delivered_at),
    )
}
