//! Command contract shared by every domain operation
//!
//! A command is a unit of work over some domain state `S`. It executes a
//! forward mutation and, if it declares an inverse, can restore the state to
//! what it was immediately before that execution.
//!
//! ## Contract
//!
//! - `has_inverse_execution()` is a property of the kind of command, never of
//!   its arguments.
//! - `execute` is all-or-nothing: on `Err` the state is untouched.
//! - A command without an inverse fails `execute_inverse` with
//!   `JarvisError::CommandNotInvertible` and leaves the state untouched. The
//!   default method implementations give exactly this behaviour.

use std::fmt;

use crate::errors::{JarvisError, Result};

/// Feedback produced by a successful execution or inverse execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }

    /// Human-readable outcome for display
    pub fn feedback_to_user(&self) -> &str {
        &self.feedback_to_user
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback_to_user)
    }
}

/// Polymorphic unit of work over domain state `S`
///
/// Commands are constructed with fully resolved parameters. They may be
/// executed, inverted and re-executed many times across rollback/commit
/// cycles, so implementations keep whatever they need for the inverse in
/// `self`.
///
/// # Example
///
/// ```
/// use jarvis_history::{Command, CommandResult, Result};
///
/// #[derive(Debug)]
/// struct Increment;
///
/// impl Command<i64> for Increment {
///     fn name(&self) -> &'static str {
///         "increment"
///     }
///
///     fn has_inverse_execution(&self) -> bool {
///         true
///     }
///
///     fn execute(&mut self, state: &mut i64) -> Result<CommandResult> {
///         *state += 1;
///         Ok(CommandResult::new(format!("Counter is now {}", state)))
///     }
///
///     fn execute_inverse(&mut self, state: &mut i64) -> Result<CommandResult> {
///         *state -= 1;
///         Ok(CommandResult::new(format!("Counter is back to {}", state)))
///     }
/// }
///
/// let mut counter = 0;
/// let mut cmd = Increment;
/// cmd.execute(&mut counter).unwrap();
/// cmd.execute_inverse(&mut counter).unwrap();
/// assert_eq!(counter, 0);
/// ```
pub trait Command<S>: fmt::Debug {
    /// Command word, used in error messages and log fields
    fn name(&self) -> &'static str;

    /// Whether `execute_inverse` is supported
    fn has_inverse_execution(&self) -> bool {
        false
    }

    /// Execute the forward mutation
    ///
    /// # Errors
    ///
    /// Returns a domain error (`EntityNotFound`, `IndexOutOfBounds`, ...) when
    /// the mutation cannot be applied. The state is left unchanged.
    fn execute(&mut self, state: &mut S) -> Result<CommandResult>;

    /// Execute the inverse mutation
    ///
    /// # Errors
    ///
    /// Returns `CommandNotInvertible` for commands without an inverse, or a
    /// domain error when the reversal cannot be applied against `state`.
    fn execute_inverse(&mut self, _state: &mut S) -> Result<CommandResult> {
        Err(JarvisError::not_invertible(self.name()))
    }
}
