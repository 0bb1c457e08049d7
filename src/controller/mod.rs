use log::info;

use crate::ledger::{Ledger, LoadReport};
use crate::parser;
use crate::parser::Statement::{Add, Delete, Edit, Export, List, Reload, Summary};
use crate::transaction::Transaction;

mod export;
mod list;
mod summary;

/// Parse one command line and run it against the ledger. Collaborators receive the ledger as
/// an explicit handle; there is no shared global instance.
pub(crate) fn parse_and_run_command(ledger: &mut Ledger, line: &str) -> Result<(), String> {
    let statement = parser::parse(line)?;

    match statement {
        Add(category, amount, description) => {
            let transaction = Transaction::new(ledger.next_id(), &category, amount, &description);
            ledger.add(transaction).map_err(|e| e.to_string())?;
            info!("Added 1 transaction.");
        }
        Edit(id, category, amount, description) => {
            let edited = ledger
                .edit(id, &category, amount, &description)
                .map_err(|e| e.to_string())?;
            info!("Edited {edited} transactions.");
        }
        Delete(id) => {
            let removed = ledger.delete(id).map_err(|e| e.to_string())?;
            info!("Deleted {removed} transactions.");
        }
        List => list::run_list(ledger),
        Summary => summary::run_summary(ledger),
        Export(file_path) => {
            let count = export::execute_export(ledger, &file_path).map_err(|e| e.to_string())?;
            info!("Exported {count} transactions to {file_path}");
        }
        Reload => match ledger.reload() {
            LoadReport::Loaded(count) => info!("Reloaded {count} transactions."),
            LoadReport::NoPriorData => info!("No data found, starting fresh."),
            LoadReport::LoadFailed(e) => return Err(e.to_string()),
        },
    }

    Ok(())
}

/// Two decimal places, display only; stored amounts are never rounded.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
