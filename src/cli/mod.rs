pub mod browse;
pub mod checkout;
pub mod recommend;

pub use browse::{browse, BrowseArgs};
pub use checkout::checkout;
pub use recommend::recommend;
