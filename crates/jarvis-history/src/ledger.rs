//! Two-stack history ledger
//!
//! The ledger owns every recorded command in exactly one of two stacks:
//!
//! - **undo**: executed and not yet rolled back, most recent at the top
//! - **redo**: rolled back and not yet recommitted, most recent rollback at the top
//!
//! Entries move between the stacks by value, so an entry can never sit in
//! both. The undo stack is bounded by `capacity`; pushing past the bound
//! evicts the bottom (oldest) entry. The redo stack is unbounded.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use jarvis_core_types::CommandId;

use crate::config::HistoryConfig;
use crate::errors::Result;

/// A recorded command plus its ledger bookkeeping
#[derive(Debug)]
pub struct LedgerEntry<C> {
    id: CommandId,
    recorded_at: DateTime<Utc>,
    command: C,
}

impl<C> LedgerEntry<C> {
    fn new(command: C) -> Self {
        Self {
            id: CommandId::new(),
            recorded_at: Utc::now(),
            command,
        }
    }

    /// Identifier assigned at record time; stable across rollback/commit
    pub fn id(&self) -> &CommandId {
        &self.id
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn command(&self) -> &C {
        &self.command
    }

    pub fn command_mut(&mut self) -> &mut C {
        &mut self.command
    }

    pub fn into_command(self) -> C {
        self.command
    }
}

/// Bounded undo stack plus unbounded redo stack
#[derive(Debug)]
pub struct HistoryLedger<C> {
    undo: VecDeque<LedgerEntry<C>>,
    redo: Vec<LedgerEntry<C>>,
    capacity: usize,
}

impl<C> Default for HistoryLedger<C> {
    fn default() -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: HistoryConfig::default().capacity,
        }
    }
}

impl<C> HistoryLedger<C> {
    /// Create an empty ledger from a config
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the config's capacity is zero.
    pub fn from_config(config: &HistoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            undo: VecDeque::with_capacity(config.capacity.min(64)),
            redo: Vec::new(),
            capacity: config.capacity,
        })
    }

    /// Create an empty ledger with the given undo capacity
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::from_config(&HistoryConfig::with_capacity(capacity)?)
    }

    /// Record a freshly executed command
    ///
    /// Clears the redo stack unconditionally. Returns the evicted entry if
    /// the undo stack was already at capacity.
    pub fn record(&mut self, command: C) -> Option<LedgerEntry<C>> {
        self.redo.clear();
        self.push_to_undo(LedgerEntry::new(command))
    }

    /// Pop the most recent undoable entry
    pub fn take_for_undo(&mut self) -> Option<LedgerEntry<C>> {
        self.undo.pop_back()
    }

    /// Push an entry that has just been rolled back
    pub fn push_to_redo(&mut self, entry: LedgerEntry<C>) {
        self.redo.push(entry);
    }

    /// Pop the most recently rolled-back entry
    pub fn take_for_redo(&mut self) -> Option<LedgerEntry<C>> {
        self.redo.pop()
    }

    /// Push an entry back onto the undo stack without touching the redo stack
    ///
    /// Returns the evicted entry if the push exceeded capacity.
    pub fn push_to_undo(&mut self, entry: LedgerEntry<C>) -> Option<LedgerEntry<C>> {
        self.undo.push_back(entry);
        if self.undo.len() > self.capacity {
            self.undo.pop_front()
        } else {
            None
        }
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the undo capacity
    ///
    /// Shrinking evicts the oldest undo entries immediately; they are
    /// returned oldest first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `capacity` is zero.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<Vec<LedgerEntry<C>>> {
        HistoryConfig::with_capacity(capacity)?;
        self.capacity = capacity;
        let excess = self.undo.len().saturating_sub(capacity);
        Ok(self.undo.drain(..excess).collect())
    }

    /// Drop every entry from both stacks
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Undo entries, oldest first
    pub fn undo_entries(&self) -> impl Iterator<Item = &LedgerEntry<C>> {
        self.undo.iter()
    }

    /// Redo entries, bottom first; the last one is committed next
    pub fn redo_entries(&self) -> impl Iterator<Item = &LedgerEntry<C>> {
        self.redo.iter()
    }
}
