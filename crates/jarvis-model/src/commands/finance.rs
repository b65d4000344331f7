//! Finance tracker commands

use jarvis_history::{Command, CommandResult, JarvisError, Result};

use crate::finance::Purchase;
use crate::model::Model;

/// Records a paid purchase; inverse removes it again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPaidCommand {
    purchase: Purchase,
}

impl SetPaidCommand {
    pub const COMMAND_WORD: &'static str = "set-paid";

    pub fn new(purchase: Purchase) -> Self {
        Self { purchase }
    }

    pub fn purchase(&self) -> &Purchase {
        &self.purchase
    }
}

impl Command<Model> for SetPaidCommand {
    fn name(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn has_inverse_execution(&self) -> bool {
        true
    }

    fn execute(&mut self, model: &mut Model) -> Result<CommandResult> {
        model
            .finance_tracker_mut()
            .add_purchase(self.purchase.clone())?;
        Ok(CommandResult::new(format!(
            "New purchase added: {}",
            self.purchase
        )))
    }

    fn execute_inverse(&mut self, model: &mut Model) -> Result<CommandResult> {
        model.finance_tracker_mut().remove_purchase(&self.purchase)?;
        Ok(CommandResult::new(format!(
            "Deleted purchase added earlier: {}",
            self.purchase
        )))
    }
}

/// Removes the purchase at a one-based index; inverse puts it back in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovePaidCommand {
    index: usize,
    removed: Option<Purchase>,
}

impl RemovePaidCommand {
    pub const COMMAND_WORD: &'static str = "remove-paid";

    pub fn new(index: usize) -> Self {
        Self {
            index,
            removed: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The purchase removed by the last successful execution
    pub fn removed(&self) -> Option<&Purchase> {
        self.removed.as_ref()
    }
}

impl Command<Model> for RemovePaidCommand {
    fn name(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn has_inverse_execution(&self) -> bool {
        true
    }

    fn execute(&mut self, model: &mut Model) -> Result<CommandResult> {
        let removed = model.finance_tracker_mut().delete_purchase(self.index)?;
        let feedback = format!("Deleted purchase: {}", removed);
        self.removed = Some(removed);
        Ok(CommandResult::new(feedback))
    }

    fn execute_inverse(&mut self, model: &mut Model) -> Result<CommandResult> {
        let Some(removed) = self.removed.clone() else {
            return Err(JarvisError::InverseBeforeExecute {
                command: self.name().to_string(),
            });
        };
        let feedback = format!("Added back purchase: {}", removed);
        model
            .finance_tracker_mut()
            .insert_purchase(self.index, removed)?;
        Ok(CommandResult::new(feedback))
    }
}

/// Lists every paid purchase; has no inverse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListPaidCommand;

impl ListPaidCommand {
    pub const COMMAND_WORD: &'static str = "list-paid";
}

impl Command<Model> for ListPaidCommand {
    fn name(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&mut self, model: &mut Model) -> Result<CommandResult> {
        let tracker = model.finance_tracker();
        if tracker.is_empty() {
            return Ok(CommandResult::new("No purchases recorded."));
        }
        let mut lines: Vec<String> = tracker
            .purchases()
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, p))
            .collect();
        lines.push(format!("Total spent: {}", tracker.total_spent()));
        Ok(CommandResult::new(lines.join("\n")))
    }
}
