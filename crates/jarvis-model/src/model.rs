use crate::finance::FinanceTracker;

/// Aggregate domain state that commands operate on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    finance_tracker: FinanceTracker,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_finance_tracker(finance_tracker: FinanceTracker) -> Self {
        Self { finance_tracker }
    }

    pub fn finance_tracker(&self) -> &FinanceTracker {
        &self.finance_tracker
    }

    pub fn finance_tracker_mut(&mut self) -> &mut FinanceTracker {
        &mut self.finance_tracker
    }
}
