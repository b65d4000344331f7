//! History coordinator
//!
//! Orchestrates the protocol between executed commands, the caller and the
//! [`HistoryLedger`]. All mutating operations (`observe_execution`,
//! `rollback`, `commit`) take `&mut self`, so they are serialized by the
//! borrow checker; a multi-threaded front end has to put the coordinator
//! behind a single lock.
//!
//! ## Failure policy
//!
//! When the inverse (during rollback) or the forward re-execution (during
//! commit) fails, the command is dropped from history entirely and the error
//! is returned. It is never put back on either stack, and nothing is retried.

use std::time::Instant;

use chrono::{DateTime, Utc};
use jarvis_core_types::schema::{OP_CLEAR, OP_COMMIT, OP_OBSERVE, OP_ROLLBACK};
use jarvis_core_types::CommandId;
use serde::Serialize;

use crate::command::{Command, CommandResult};
use crate::config::HistoryConfig;
use crate::errors::{JarvisError, Result};
use crate::ledger::{HistoryLedger, LedgerEntry};
use crate::{log_op_end, log_op_error, log_op_start};

/// Outcome of a single rollback request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackOutcome {
    /// The most recent command was inverted; carries the inverse's feedback
    RolledBack(CommandResult),
    /// The undo stack was empty; nothing changed
    NothingToUndo,
}

/// Outcome of a single commit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The most recently rolled-back command was re-executed
    Committed(CommandResult),
    /// The redo stack was empty; nothing changed
    NothingToRedo,
}

/// Read-only view of one ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub id: CommandId,
    pub command: String,
    pub recorded_at: DateTime<Utc>,
}

/// Serializable view of the whole ledger, for UI affordances
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySnapshot {
    pub capacity: usize,
    /// Oldest first
    pub undo: Vec<EntryView>,
    /// Bottom first; the last entry is committed next
    pub redo: Vec<EntryView>,
}

impl HistorySnapshot {
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

/// Owned, type-erased command over state `S`
pub type BoxedCommand<S> = Box<dyn Command<S>>;

/// Coordinates command history over domain state `S`
#[derive(Debug)]
pub struct HistoryCoordinator<S> {
    ledger: HistoryLedger<BoxedCommand<S>>,
}

impl<S> Default for HistoryCoordinator<S> {
    fn default() -> Self {
        Self {
            ledger: HistoryLedger::default(),
        }
    }
}

impl<S> HistoryCoordinator<S> {
    /// Create a coordinator with the default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coordinator from a config
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the capacity is zero.
    pub fn from_config(config: &HistoryConfig) -> Result<Self> {
        Ok(Self {
            ledger: HistoryLedger::from_config(config)?,
        })
    }

    /// Record a command that has just executed successfully
    ///
    /// Non-invertible commands leave no trace. Returns whether the command
    /// was recorded.
    pub fn observe_execution(&mut self, command: BoxedCommand<S>) -> bool {
        let start = Instant::now();
        let name = command.name();
        log_op_start!(OP_OBSERVE, command = name);

        if !command.has_inverse_execution() {
            log_op_end!(
                OP_OBSERVE,
                duration_ms = elapsed_ms(start),
                command = name,
                recorded = false
            );
            return false;
        }

        let discarded_redo = self.ledger.redo_len();
        if let Some(evicted) = self.ledger.record(command) {
            tracing::debug!(
                command_id = %evicted.id(),
                command = evicted.command().name(),
                capacity = self.ledger.capacity(),
                "evicted oldest history entry"
            );
        }
        if discarded_redo > 0 {
            tracing::debug!(discarded_redo, "new command invalidated redo history");
        }

        log_op_end!(
            OP_OBSERVE,
            duration_ms = elapsed_ms(start),
            command = name,
            recorded = true,
            undo_len = self.ledger.undo_len()
        );
        true
    }

    /// Roll back the most recently executed command
    ///
    /// # Errors
    ///
    /// Propagates the error from `execute_inverse`. The failed command is
    /// dropped from history; it does not move to the redo stack.
    pub fn rollback(&mut self, state: &mut S) -> Result<RollbackOutcome> {
        let start = Instant::now();
        log_op_start!(OP_ROLLBACK, undo_len = self.ledger.undo_len());

        let Some(mut entry) = self.ledger.take_for_undo() else {
            log_op_end!(
                OP_ROLLBACK,
                duration_ms = elapsed_ms(start),
                outcome = "nothing_to_undo"
            );
            return Ok(RollbackOutcome::NothingToUndo);
        };

        match entry.command_mut().execute_inverse(state) {
            Ok(result) => {
                let name = entry.command().name();
                self.ledger.push_to_redo(entry);
                log_op_end!(
                    OP_ROLLBACK,
                    duration_ms = elapsed_ms(start),
                    command = name,
                    undo_len = self.ledger.undo_len(),
                    redo_len = self.ledger.redo_len()
                );
                Ok(RollbackOutcome::RolledBack(result))
            }
            Err(err) => {
                drop_entry(&entry, "inverse execution failed");
                log_op_error!(OP_ROLLBACK, &err, duration_ms = elapsed_ms(start));
                Err(err)
            }
        }
    }

    /// Re-execute the most recently rolled-back command
    ///
    /// # Errors
    ///
    /// Propagates the error from `execute`. The failed command is dropped
    /// from history; it does not return to either stack.
    pub fn commit(&mut self, state: &mut S) -> Result<CommitOutcome> {
        let start = Instant::now();
        log_op_start!(OP_COMMIT, redo_len = self.ledger.redo_len());

        let Some(mut entry) = self.ledger.take_for_redo() else {
            log_op_end!(
                OP_COMMIT,
                duration_ms = elapsed_ms(start),
                outcome = "nothing_to_redo"
            );
            return Ok(CommitOutcome::NothingToRedo);
        };

        match entry.command_mut().execute(state) {
            Ok(result) => {
                let name = entry.command().name();
                if let Some(evicted) = self.ledger.push_to_undo(entry) {
                    tracing::debug!(
                        command_id = %evicted.id(),
                        command = evicted.command().name(),
                        "evicted oldest history entry"
                    );
                }
                log_op_end!(
                    OP_COMMIT,
                    duration_ms = elapsed_ms(start),
                    command = name,
                    undo_len = self.ledger.undo_len(),
                    redo_len = self.ledger.redo_len()
                );
                Ok(CommitOutcome::Committed(result))
            }
            Err(err) => {
                drop_entry(&entry, "re-execution failed");
                log_op_error!(OP_COMMIT, &err, duration_ms = elapsed_ms(start));
                Err(err)
            }
        }
    }

    /// Roll back `count` commands, most recent first
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `count` is zero
    /// - `InsufficientHistory` if fewer than `count` commands are undoable;
    ///   nothing is rolled back in that case
    /// - the first failing inverse's error; earlier steps stay rolled back
    pub fn rollback_many(&mut self, count: usize, state: &mut S) -> Result<Vec<CommandResult>> {
        check_depth("undo", count, self.ledger.undo_len())?;

        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            match self.rollback(state)? {
                RollbackOutcome::RolledBack(result) => results.push(result),
                RollbackOutcome::NothingToUndo => break,
            }
        }
        Ok(results)
    }

    /// Commit `count` rolled-back commands, most recent rollback first
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `count` is zero
    /// - `InsufficientHistory` if fewer than `count` commands are redoable;
    ///   nothing is committed in that case
    /// - the first failing re-execution's error; earlier steps stay committed
    pub fn commit_many(&mut self, count: usize, state: &mut S) -> Result<Vec<CommandResult>> {
        check_depth("redo", count, self.ledger.redo_len())?;

        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            match self.commit(state)? {
                CommitOutcome::Committed(result) => results.push(result),
                CommitOutcome::NothingToRedo => break,
            }
        }
        Ok(results)
    }

    pub fn can_rollback(&self) -> bool {
        self.ledger.can_undo()
    }

    pub fn can_commit(&self) -> bool {
        self.ledger.can_redo()
    }

    /// Number of commands available to roll back
    pub fn undo_len(&self) -> usize {
        self.ledger.undo_len()
    }

    /// Number of commands available to commit
    pub fn redo_len(&self) -> usize {
        self.ledger.redo_len()
    }

    pub fn capacity(&self) -> usize {
        self.ledger.capacity()
    }

    /// Change the undo capacity, evicting the oldest entries if it shrinks
    ///
    /// Returns how many entries were evicted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `capacity` is zero.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<usize> {
        let evicted = self.ledger.set_capacity(capacity)?;
        if !evicted.is_empty() {
            tracing::debug!(
                evicted = evicted.len(),
                capacity,
                "history capacity reduced"
            );
        }
        Ok(evicted.len())
    }

    /// Forget every recorded command
    pub fn clear(&mut self) {
        let start = Instant::now();
        log_op_start!(
            OP_CLEAR,
            undo_len = self.ledger.undo_len(),
            redo_len = self.ledger.redo_len()
        );
        self.ledger.clear();
        log_op_end!(OP_CLEAR, duration_ms = elapsed_ms(start));
    }

    /// Serializable view of both stacks
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            capacity: self.ledger.capacity(),
            undo: self.ledger.undo_entries().map(entry_view).collect(),
            redo: self.ledger.redo_entries().map(entry_view).collect(),
        }
    }

    /// Read-only access to the underlying ledger
    pub fn ledger(&self) -> &HistoryLedger<BoxedCommand<S>> {
        &self.ledger
    }
}

fn entry_view<S>(entry: &LedgerEntry<BoxedCommand<S>>) -> EntryView {
    EntryView {
        id: entry.id().clone(),
        command: entry.command().name().to_string(),
        recorded_at: entry.recorded_at(),
    }
}

fn drop_entry<S>(entry: &LedgerEntry<BoxedCommand<S>>, reason: &str) {
    tracing::warn!(
        command_id = %entry.id(),
        command = entry.command().name(),
        reason,
        "dropping command from history"
    );
}

fn check_depth(direction: &str, requested: usize, available: usize) -> Result<()> {
    if requested == 0 {
        return Err(JarvisError::InvalidInput {
            reason: format!("number of commands to {} must be at least 1", direction),
        });
    }
    if requested > available {
        return Err(JarvisError::InsufficientHistory {
            direction: direction.to_string(),
            requested,
            available,
        });
    }
    Ok(())
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
