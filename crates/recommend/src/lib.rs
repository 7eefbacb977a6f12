pub mod affinity;
pub mod error;
pub mod history;
pub mod ranker;
pub mod review;
pub mod types;

pub use affinity::{TasteAffinityIndex, HIGH_AFFINITY_RATING};
pub use error::{RecommendError, RecommendResult};
pub use history::OrderHistory;
pub use ranker::rank;
pub use review::ReviewSubmission;
pub use types::{PastOrderRecord, MAX_RATING};
