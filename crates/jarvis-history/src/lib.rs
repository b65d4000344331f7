//! Jarvis History - command history engine
//!
//! Records every executed command across all domain trackers in one linear
//! timeline, and lets that timeline be rolled back (undo) and recommitted
//! (redo). Only commands that declare an inverse are recorded.
//!
//! - [`Command`]: the execute / inverse-execute contract over a domain state
//! - [`HistoryLedger`]: bounded undo stack plus redo stack
//! - [`HistoryCoordinator`]: observe / rollback / commit protocol
//! - [`HistoryConfig`]: undo capacity from TOML or the environment
//! - Structured errors and logging shared by everything above

pub mod command;
pub mod config;
pub mod coordinator;
pub mod errors;
pub mod ledger;
pub mod logging_facility;

// Re-export commonly used types
pub use command::{Command, CommandResult};
pub use config::HistoryConfig;
pub use coordinator::{
    BoxedCommand, CommitOutcome, EntryView, HistoryCoordinator, HistorySnapshot,
    RollbackOutcome,
};
pub use errors::{ExError, ExErrorKind, JarvisError, Result};
pub use ledger::{HistoryLedger, LedgerEntry};
