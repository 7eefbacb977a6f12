use std::collections::HashSet;

use crate::error::{RecommendError, RecommendResult};
use crate::ranker::rank;
use crate::review::ReviewSubmission;
use crate::types::{PastOrderRecord, MAX_RATING};

/// The signed-in user's delivered orders, kept in the order the provider returned them.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<PastOrderRecord>,
}

impl OrderHistory {
    pub fn new(orders: Vec<PastOrderRecord>) -> RecommendResult<Self> {
        let mut seen = HashSet::with_capacity(orders.len());

        for order in &orders {
            if order.rating > MAX_RATING {
                return Err(RecommendError::RatingOutOfRange {
                    id: order.id,
                    rating: order.rating,
                });
            }

            if !seen.insert(order.id) {
                return Err(RecommendError::DuplicateOrder(order.id));
            }
        }

        Ok(Self { orders })
    }

    pub fn orders(&self) -> &[PastOrderRecord] {
        &self.orders
    }

    pub fn get(&self, order_id: u32) -> Option<&PastOrderRecord> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Ranks the current snapshot; recomputed on every call.
    pub fn recommendations(&self) -> Vec<&PastOrderRecord> {
        rank(&self.orders)
    }

    /// Unrated orders, most recent delivery first.
    pub fn awaiting_review(&self) -> Vec<&PastOrderRecord> {
        let mut pending: Vec<&PastOrderRecord> =
            self.orders.iter().filter(|order| !order.is_rated()).collect();
        pending.sort_by(|a, b| b.delivered_at.cmp(&a.delivered_at));
        pending
    }

    /// Records a confirmed review. An order can be reviewed once.
    pub fn submit_review(
        &mut self,
        order_id: u32,
        submission: ReviewSubmission,
    ) -> RecommendResult<&PastOrderRecord> {
        let submission = submission.into_checked()?;

        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or(RecommendError::OrderNotFound(order_id))?;

        if order.is_rated() {
            return Err(RecommendError::AlreadyReviewed(order_id));
        }

        order.rating = submission.rating;
        order.review_comment = submission.comment;

        tracing::info!(order_id, rating = order.rating, "review recorded");

        Ok(&*order)
    }
}
