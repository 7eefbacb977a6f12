use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{RecommendError, RecommendResult};

/// A star rating with an optional comment for one delivered order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewSubmission {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,

    #[validate(length(max = 500, message = "Review comment must not exceed 500 characters"))]
    pub comment: Option<String>,
}

impl ReviewSubmission {
    pub fn new(rating: u8, comment: Option<String>) -> Self {
        Self { rating, comment }
    }

    /// Validates the submission and normalizes a blank comment to `None`.
    pub fn into_checked(self) -> RecommendResult<Self> {
        self.validate()
            .map_err(|e| RecommendError::ValidationError(e.to_string()))?;

        let comment = self
            .comment
            .map(|comment| comment.trim().to_owned())
            .filter(|comment| !comment.is_empty());

        Ok(Self {
            rating: self.rating,
            comment,
        })
    }
}
