//! Shared helpers for finance tracker tests

use jarvis_history::HistoryConfig;
use jarvis_model::finance::Purchase;
use jarvis_model::{LogicManager, Model};

#[allow(dead_code)]
pub fn purchase(description: &str, amount: &str) -> Purchase {
    Purchase::new(description, amount).expect("valid purchase")
}

#[allow(dead_code)]
pub fn logic_with_capacity(capacity: usize) -> LogicManager {
    let config = HistoryConfig::with_capacity(capacity).expect("valid capacity");
    LogicManager::new(Model::new(), &config).expect("valid config")
}

/// Descriptions of the tracked purchases, in list order
#[allow(dead_code)]
pub fn descriptions(logic: &LogicManager) -> Vec<String> {
    logic
        .model()
        .finance_tracker()
        .purchases()
        .iter()
        .map(|p| p.description().to_string())
        .collect()
}
