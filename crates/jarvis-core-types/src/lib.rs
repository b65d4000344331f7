//! Core types shared across the Jarvis history facilities
//!
//! This crate provides foundational types used by the history ledger,
//! error handling and logging facilities:
//!
//! - **Identifiers**: CommandId for ledger entries
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::CommandId;
