//! Jarvis model and dispatch layer
//!
//! A finance tracker domain whose commands run through
//! [`jarvis_history::HistoryCoordinator`], plus the [`LogicManager`] that
//! wires execution, undo and redo together.

pub mod commands;
pub mod finance;
pub mod logic;
pub mod model;

pub use logic::LogicManager;
pub use model::Model;
