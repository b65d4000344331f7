//! Finance Session Demo
//!
//! Walks a small finance tracker session through execute, undo and redo.
//! Run with `JARVIS_HISTORY_CAPACITY=2` to watch the oldest entries fall off.

use jarvis_history::logging_facility::{init, Profile};
use jarvis_history::HistoryConfig;
use jarvis_model::commands::{ListPaidCommand, RemovePaidCommand, SetPaidCommand};
use jarvis_model::finance::Purchase;
use jarvis_model::{LogicManager, Model};

fn main() -> anyhow::Result<()> {
    init(Profile::Development);

    let config = HistoryConfig::from_env()?;
    let mut logic = LogicManager::new(Model::new(), &config)?;
    println!("=== Jarvis Finance Session (capacity {}) ===\n", config.capacity);

    for (description, amount) in [("coffee", "1.50"), ("lunch at Saizerya", "5"), ("movie", "12.00")] {
        let result = logic.execute(Box::new(SetPaidCommand::new(Purchase::new(
            description,
            amount,
        )?)))?;
        println!("> {}", result);
    }
    println!("> {}", logic.execute(Box::new(RemovePaidCommand::new(1)))?);
    println!("\n{}\n", logic.execute(Box::new(ListPaidCommand))?);

    println!("## Undo 2\n{}\n", logic.undo(2)?);
    println!("{}\n", logic.execute(Box::new(ListPaidCommand))?);

    println!("## Redo 1\n{}\n", logic.redo(1)?);
    println!("## Redo 1\n{}\n", logic.redo(1)?);
    println!("## Redo 1\n{}\n", logic.redo(1)?);

    let snapshot = logic.snapshot();
    println!(
        "History: {} undoable, {} redoable",
        snapshot.undo.len(),
        snapshot.redo.len()
    );
    Ok(())
}
