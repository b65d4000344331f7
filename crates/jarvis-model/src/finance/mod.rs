//! Finance tracker domain: paid purchases

pub mod purchase;
pub mod tracker;

pub use purchase::{Money, Purchase};
pub use tracker::FinanceTracker;
