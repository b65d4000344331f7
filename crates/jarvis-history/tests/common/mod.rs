//! Fake domain state and commands for exercising the history core

use jarvis_history::{Command, CommandResult, HistoryCoordinator, JarvisError, Result};

/// Minimal tracker: an ordered list of named notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    pub notes: Vec<String>,
}

impl Notebook {
    #[allow(dead_code)]
    pub fn with_notes(notes: &[&str]) -> Self {
        Self {
            notes: notes.iter().map(|n| n.to_string()).collect(),
        }
    }

    fn remove_last(&mut self, text: &str) -> Result<String> {
        let position = self
            .notes
            .iter()
            .rposition(|n| n == text)
            .ok_or_else(|| JarvisError::EntityNotFound {
                entity: "Note".to_string(),
                id: text.to_string(),
            })?;
        Ok(self.notes.remove(position))
    }
}

/// Appends a note; inverse removes it again
#[derive(Debug, Clone)]
pub struct AddNote(pub String);

impl Command<Notebook> for AddNote {
    fn name(&self) -> &'static str {
        "add-note"
    }

    fn has_inverse_execution(&self) -> bool {
        true
    }

    fn execute(&mut self, state: &mut Notebook) -> Result<CommandResult> {
        state.notes.push(self.0.clone());
        Ok(CommandResult::new(format!("Added note: {}", self.0)))
    }

    fn execute_inverse(&mut self, state: &mut Notebook) -> Result<CommandResult> {
        state.remove_last(&self.0)?;
        Ok(CommandResult::new(format!("Removed note: {}", self.0)))
    }
}

/// Deletes the note at a one-based index; inverse restores it in place
#[derive(Debug, Clone)]
pub struct DeleteNote {
    pub index: usize,
    pub removed: Option<String>,
}

impl DeleteNote {
    #[allow(dead_code)]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            removed: None,
        }
    }
}

impl Command<Notebook> for DeleteNote {
    fn name(&self) -> &'static str {
        "delete-note"
    }

    fn has_inverse_execution(&self) -> bool {
        true
    }

    fn execute(&mut self, state: &mut Notebook) -> Result<CommandResult> {
        if self.index == 0 || self.index > state.notes.len() {
            return Err(JarvisError::IndexOutOfBounds {
                index: self.index,
                len: state.notes.len(),
            });
        }
        let removed = state.notes.remove(self.index - 1);
        let feedback = format!("Deleted note: {}", removed);
        self.removed = Some(removed);
        Ok(CommandResult::new(feedback))
    }

    fn execute_inverse(&mut self, state: &mut Notebook) -> Result<CommandResult> {
        let removed = self
            .removed
            .clone()
            .ok_or_else(|| JarvisError::InverseBeforeExecute {
                command: self.name().to_string(),
            })?;
        if self.index - 1 > state.notes.len() {
            return Err(JarvisError::IndexOutOfBounds {
                index: self.index,
                len: state.notes.len(),
            });
        }
        state.notes.insert(self.index - 1, removed.clone());
        Ok(CommandResult::new(format!("Restored note: {}", removed)))
    }
}

/// Read-only listing; has no inverse
#[derive(Debug, Clone)]
pub struct ListNotes;

impl Command<Notebook> for ListNotes {
    fn name(&self) -> &'static str {
        "list-notes"
    }

    fn execute(&mut self, state: &mut Notebook) -> Result<CommandResult> {
        Ok(CommandResult::new(format!("{} notes listed", state.notes.len())))
    }
}

/// Execute a command and, on success, hand it to the coordinator
#[allow(dead_code)]
pub fn run(
    history: &mut HistoryCoordinator<Notebook>,
    state: &mut Notebook,
    mut command: Box<dyn Command<Notebook>>,
) -> Result<CommandResult> {
    let result = command.execute(state)?;
    history.observe_execution(command);
    Ok(result)
}

/// Debug renderings of the undo stack, oldest first
#[allow(dead_code)]
pub fn undo_stack(history: &HistoryCoordinator<Notebook>) -> Vec<String> {
    history
        .ledger()
        .undo_entries()
        .map(|e| format!("{:?}", e.command()))
        .collect()
}

/// Debug renderings of the redo stack, bottom first; the last is committed next
#[allow(dead_code)]
pub fn redo_stack(history: &HistoryCoordinator<Notebook>) -> Vec<String> {
    history
        .ledger()
        .redo_entries()
        .map(|e| format!("{:?}", e.command()))
        .collect()
}

/// Debug rendering of `AddNote(text)`, for comparing against stack views
#[allow(dead_code)]
pub fn add(text: &str) -> String {
    format!("{:?}", AddNote(text.to_string()))
}
