//! Dispatch layer
//!
//! [`LogicManager`] owns the [`Model`] and the [`HistoryCoordinator`] side by
//! side. Undo and redo are requests to the manager, not commands, so they
//! never end up in the history they operate on.

use std::time::Instant;

use jarvis_core_types::schema::OP_EXECUTE;
use jarvis_history::{
    BoxedCommand, CommandResult, HistoryConfig, HistoryCoordinator, HistorySnapshot, Result,
};
use jarvis_history::{log_op_end, log_op_error, log_op_start};

use crate::model::Model;

pub const MESSAGE_NOTHING_TO_UNDO: &str = "Nothing to undo.";
pub const MESSAGE_NOTHING_TO_REDO: &str = "Nothing to redo.";

#[derive(Debug)]
pub struct LogicManager {
    model: Model,
    history: HistoryCoordinator<Model>,
}

impl LogicManager {
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configured capacity is zero.
    pub fn new(model: Model, config: &HistoryConfig) -> Result<Self> {
        Ok(Self {
            model,
            history: HistoryCoordinator::from_config(config)?,
        })
    }

    /// Execute a command against the model and record it if invertible
    ///
    /// # Errors
    ///
    /// Propagates the command's error. A failed command is not recorded.
    pub fn execute(&mut self, mut command: BoxedCommand<Model>) -> Result<CommandResult> {
        let start = Instant::now();
        let name = command.name();
        log_op_start!(OP_EXECUTE, command = name);

        match command.execute(&mut self.model) {
            Ok(result) => {
                let recorded = self.history.observe_execution(command);
                log_op_end!(
                    OP_EXECUTE,
                    duration_ms = elapsed_ms(start),
                    command = name,
                    recorded = recorded
                );
                Ok(result)
            }
            Err(err) => {
                log_op_error!(
                    OP_EXECUTE,
                    &err,
                    duration_ms = elapsed_ms(start),
                    command = name
                );
                Err(err)
            }
        }
    }

    /// Undo the last `count` commands
    ///
    /// Returns "Nothing to undo." when the history is empty, otherwise the
    /// inverse feedback of each step, one per line.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a zero count, `InsufficientHistory` when fewer
    /// than `count` commands can be undone, or the first failing inverse.
    pub fn undo(&mut self, count: usize) -> Result<CommandResult> {
        if count > 0 && !self.history.can_rollback() {
            return Ok(CommandResult::new(MESSAGE_NOTHING_TO_UNDO));
        }
        let results = self.history.rollback_many(count, &mut self.model)?;
        Ok(join_feedback(&results))
    }

    /// Redo the last `count` undone commands
    ///
    /// # Errors
    ///
    /// Same as [`LogicManager::undo`], for the redo direction.
    pub fn redo(&mut self, count: usize) -> Result<CommandResult> {
        if count > 0 && !self.history.can_commit() {
            return Ok(CommandResult::new(MESSAGE_NOTHING_TO_REDO));
        }
        let results = self.history.commit_many(count, &mut self.model)?;
        Ok(join_feedback(&results))
    }

    /// Forget all history; the model is left as is
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_rollback()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_commit()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.history.snapshot()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn history(&self) -> &HistoryCoordinator<Model> {
        &self.history
    }
}

fn join_feedback(results: &[CommandResult]) -> CommandResult {
    let lines: Vec<&str> = results.iter().map(|r| r.feedback_to_user()).collect();
    CommandResult::new(lines.join("\n"))
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
