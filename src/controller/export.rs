use csv::WriterBuilder;

use crate::ledger::Ledger;

/// Export all transactions to a csv file. Returns the number of rows written.
pub(crate) fn execute_export(ledger: &Ledger, file_path: &str) -> Result<usize, csv::Error> {
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_path(file_path)?;
    let mut count = 0;
    for t in ledger.transactions() {
        csv_writer.serialize(t)?;
        count += 1;
    }
    csv_writer.flush()?;

    Ok(count)
}
