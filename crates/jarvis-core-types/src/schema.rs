//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Ledger entry identifiers
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_COMMAND_ID: &str = "command_id";

// Ledger sizes
pub const FIELD_UNDO_LEN: &str = "undo_len";
pub const FIELD_REDO_LEN: &str = "redo_len";
pub const FIELD_CAPACITY: &str = "capacity";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names for the history coordinator
pub const OP_OBSERVE: &str = "history.observe";
pub const OP_ROLLBACK: &str = "history.rollback";
pub const OP_COMMIT: &str = "history.commit";
pub const OP_CLEAR: &str = "history.clear";

// Operation names for the dispatch layer
pub const OP_EXECUTE: &str = "logic.execute";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_COMMAND.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_history_ops_are_namespaced() {
        for op in [OP_OBSERVE, OP_ROLLBACK, OP_COMMIT, OP_CLEAR] {
            assert!(op.starts_with("history."), "{} is not namespaced", op);
        }
    }
}
