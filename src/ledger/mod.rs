use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::info;
use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// fintrack binary version
const FINTRACK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bytes reserved at the start of the ledger file for metadata.
const HEADER_LEN: usize = 1024;

/// Metadata of the ledger file. Contains the version of fintrack that was used to write the
/// ledger to disk.
#[derive(Serialize, Deserialize, Debug)]
struct Metadata {
    version: String,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum LedgerError {
    #[error("ledger file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ledger file could not be decoded: {0}")]
    Decode(#[from] bincode::Error),
}

/// Outcome of opening or reloading the ledger file. The missing-file and unreadable-file cases
/// both leave an empty ledger in memory but stay distinguishable for the caller.
#[derive(Debug)]
pub(crate) enum LoadReport {
    Loaded(usize),
    NoPriorData,
    LoadFailed(LedgerError),
}

/// Totals over all records whose category is "Income" or "Expense", matched
/// case-insensitively. Records in any other category count toward neither.
#[derive(Debug, PartialEq)]
pub(crate) struct Summary {
    pub(crate) income_total: f64,
    pub(crate) expense_total: f64,
}

impl Summary {
    pub(crate) fn net_flow(&self) -> f64 {
        self.income_total - self.expense_total
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,

    #[serde(skip_serializing, skip_deserializing)]
    file_path: Option<String>,
}

impl Ledger {
    pub(crate) fn new(file_path: Option<String>) -> Ledger {
        Ledger {
            transactions: vec![],
            file_path,
        }
    }

    /// Open the ledger file and load its contents. A missing file is not a failure, and a file
    /// that cannot be read or decoded leaves an empty ledger; both are reported, never thrown.
    pub(crate) fn open(path_str: &str) -> (Ledger, LoadReport) {
        let path = Path::new(path_str);
        if !path.exists() {
            return (Ledger::new(Some(path_str.to_string())), LoadReport::NoPriorData);
        }

        match Ledger::read_file(path) {
            Ok(mut ledger) => {
                ledger.file_path = Some(path_str.to_string());
                let count = ledger.transactions.len();
                (ledger, LoadReport::Loaded(count))
            }
            Err(e) => (Ledger::new(Some(path_str.to_string())), LoadReport::LoadFailed(e)),
        }
    }

    /// Re-read the ledger file, replacing whatever is currently held in memory.
    pub(crate) fn reload(&mut self) -> LoadReport {
        let path_str = match &self.file_path {
            Some(p) => p.clone(),
            None => return LoadReport::NoPriorData,
        };

        let (ledger, report) = Ledger::open(&path_str);
        self.transactions = ledger.transactions;
        report
    }

    fn read_file(path: &Path) -> Result<Ledger, LedgerError> {
        let mut file = fs::File::open(path)?;
        let metadata_len = file.read_u16::<LittleEndian>()?;
        let mut buffer = vec![0; metadata_len as usize];
        file.read_exact(&mut buffer)?;
        let metadata: Metadata = bincode::deserialize(&buffer)?;
        info!("Ledger file version {}", metadata.version);

        file.seek(SeekFrom::Start(HEADER_LEN as u64))?;
        let mut buffer: Vec<u8> = vec![];
        file.read_to_end(&mut buffer)?;

        let ledger: Ledger = bincode::deserialize(&buffer)?;
        Ok(ledger)
    }

    /// Write the full ledger to disk. Every mutation rewrites the whole file.
    pub(crate) fn save(&self) -> Result<(), LedgerError> {
        // Create metadata using current binary version
        let metadata = Metadata {
            version: FINTRACK_VERSION.to_string(),
        };
        let metadata_encoded: Vec<u8> = bincode::serialize(&metadata)?;
        let metadata_length = metadata_encoded.len();
        assert!(metadata_length <= HEADER_LEN - 2);

        let encoded: Vec<u8> = bincode::serialize(&self)?;

        let mut file = fs::File::create(self.file_path.as_ref().expect("ledger file path is set"))?;
        // First 2 bytes hold the metadata length
        file.write_u16::<LittleEndian>(metadata_length as u16)?;
        file.write_all(&metadata_encoded)?;
        // Zero-fill the remainder of the header
        let remaining_header_bytes = HEADER_LEN - 2 - metadata_length;
        file.write_all(&vec![0; remaining_header_bytes])?;

        file.write_all(&encoded)?;
        file.flush()?;
        Ok(())
    }

    /// Append a transaction and persist. Ids are not checked for uniqueness; a caller-supplied
    /// colliding id leaves both records in place.
    pub(crate) fn add(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        self.transactions.push(transaction);
        self.save()
    }

    /// Overwrite the mutable fields of every record matching `id`, persisting after each match.
    /// Returns the number of records touched; zero matches is not an error.
    pub(crate) fn edit(
        &mut self,
        id: u32,
        category: &str,
        amount: f64,
        description: &str,
    ) -> Result<usize, LedgerError> {
        let mut edited = 0;
        for i in 0..self.transactions.len() {
            if self.transactions[i].id() == id {
                let t = &mut self.transactions[i];
                t.set_category(category);
                t.set_amount(amount);
                t.set_description(description);
                self.save()?;
                edited += 1;
            }
        }

        Ok(edited)
    }

    /// Remove every record matching `id`, then persist. Returns the number removed; zero
    /// matches is not an error.
    pub(crate) fn delete(&mut self, id: u32) -> Result<usize, LedgerError> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id() != id);
        let removed = before - self.transactions.len();
        self.save()?;
        Ok(removed)
    }

    /// Id for the next record: one past the id of the last element in insertion order, or 1 on
    /// an empty ledger. This is not the maximum id in the collection — deleting the tail record
    /// re-issues an id that may still be live earlier in the list.
    pub(crate) fn next_id(&self) -> u32 {
        match self.transactions.last() {
            Some(t) => t.id() + 1,
            None => 1,
        }
    }

    /// The live collection, in insertion order.
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn summarize(&self) -> Summary {
        let mut income_total = 0.0;
        let mut expense_total = 0.0;
        for t in &self.transactions {
            if t.category().eq_ignore_ascii_case("Income") {
                income_total += t.amount();
            } else if t.category().eq_ignore_ascii_case("Expense") {
                expense_total += t.amount();
            }
        }

        Summary {
            income_total,
            expense_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::{tempdir, TempDir};

    use super::*;

    fn scratch_ledger(dir: &TempDir) -> Ledger {
        let path = dir.path().join("ledger.dat");
        let (ledger, report) = Ledger::open(path.to_str().unwrap());
        assert!(matches!(report, LoadReport::NoPriorData));
        ledger
    }

    #[test]
    fn open_without_file_reports_no_prior_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.dat");

        let (ledger, report) = Ledger::open(path.to_str().unwrap());
        assert!(matches!(report, LoadReport::NoPriorData));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn open_with_corrupt_file_reports_load_failed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.dat");
        fs::write(&path, b"not a ledger file").unwrap();

        let (ledger, report) = Ledger::open(path.to_str().unwrap());
        assert!(matches!(report, LoadReport::LoadFailed(_)));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn round_trip_preserves_contents_and_order() {
        let dir = tempdir().unwrap();
        let mut ledger = scratch_ledger(&dir);

        ledger.add(Transaction::new(1, "Income", 1000.0, "salary")).unwrap();
        ledger.add(Transaction::new(2, "Expense", 42.5, "groceries")).unwrap();
        ledger.edit(1, "Income", 1200.0, "salary plus bonus").unwrap();
        ledger.delete(2).unwrap();
        ledger.add(Transaction::new(ledger.next_id(), "Expense", 9.99, "coffee")).unwrap();

        let path = dir.path().join("ledger.dat");
        let (reloaded, report) = Ledger::open(path.to_str().unwrap());
        assert!(matches!(report, LoadReport::Loaded(2)));
        assert_eq!(reloaded.transactions(), ledger.transactions());
    }

    #[test]
    fn reload_replaces_in_memory_contents() {
        let dir = tempdir().unwrap();
        let mut writer = scratch_ledger(&dir);
        let mut reader = scratch_ledger(&dir);

        writer.add(Transaction::new(1, "Income", 500.0, "refund")).unwrap();

        let report = reader.reload();
        assert!(matches!(report, LoadReport::Loaded(1)));
        assert_eq!(reader.transactions(), writer.transactions());
    }

    #[test]
    fn next_id_on_empty_ledger_is_one() {
        let dir = tempdir().unwrap();
        let mut ledger = scratch_ledger(&dir);
        assert_eq!(ledger.next_id(), 1);

        ledger.add(Transaction::new(1, "Income", 10.0, "first")).unwrap();
        assert_eq!(ledger.next_id(), 2);
    }

    #[test]
    fn next_id_follows_last_element_after_head_delete() {
        let dir = tempdir().unwrap();
        let mut ledger = scratch_ledger(&dir);

        ledger.add(Transaction::new(1, "Income", 10.0, "a")).unwrap();
        ledger.add(Transaction::new(2, "Expense", 5.0, "b")).unwrap();
        ledger.delete(1).unwrap();

        assert_eq!(ledger.next_id(), 3);
        ledger.add(Transaction::new(ledger.next_id(), "Expense", 2.0, "c")).unwrap();
        let ids: Vec<u32> = ledger.transactions().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn next_id_reissues_id_after_tail_delete() {
        let dir = tempdir().unwrap();
        let mut ledger = scratch_ledger(&dir);

        ledger.add(Transaction::new(1, "Income", 10.0, "a")).unwrap();
        ledger.add(Transaction::new(2, "Expense", 5.0, "b")).unwrap();
        ledger.delete(2).unwrap();

        // Derived from the last element, not the maximum ever issued
        assert_eq!(ledger.next_id(), 2);
        ledger.add(Transaction::new(ledger.next_id(), "Expense", 2.0, "c")).unwrap();
        let ids: Vec<u32> = ledger.transactions().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn edit_touches_every_matching_record() {
        let dir = tempdir().unwrap();
        let mut ledger = scratch_ledger(&dir);

        // add does not reject colliding ids, so both records coexist
        ledger.add(Transaction::new(7, "Income", 10.0, "a")).unwrap();
        ledger.add(Transaction::new(7, "Expense", 5.0, "b")).unwrap();

        let edited = ledger.edit(7, "Expense", 1.0, "both").unwrap();
        assert_eq!(edited, 2);
        for t in ledger.transactions() {
            assert_eq!(t.category(), "Expense");
            assert_eq!(t.amount(), 1.0);
            assert_eq!(t.description(), "both");
        }
    }

    #[test]
    fn edit_of_missing_id_is_a_no_op() {
        let dir = tempdir().unwrap();
        let mut ledger = scratch_ledger(&dir);
        ledger.add(Transaction::new(1, "Income", 10.0, "a")).unwrap();

        let snapshot = ledger.transactions().to_vec();
        let edited = ledger.edit(99, "Expense", 0.0, "nothing").unwrap();
        assert_eq!(edited, 0);
        assert_eq!(ledger.transactions(), snapshot.as_slice());
    }

    #[test]
    fn delete_of_missing_id_is_a_no_op() {
        let dir = tempdir().unwrap();
        let mut ledger = scratch_ledger(&dir);
        ledger.add(Transaction::new(1, "Income", 10.0, "a")).unwrap();

        let snapshot = ledger.transactions().to_vec();
        let removed = ledger.delete(99).unwrap();
        assert_eq!(removed, 0);
        assert_eq!(ledger.transactions(), snapshot.as_slice());
    }

    #[test]
    fn summary_matches_categories_case_insensitively() {
        let mut ledger = Ledger::new(None);
        ledger.transactions.push(Transaction::new(1, "Income", 100.0, "salary"));
        ledger.transactions.push(Transaction::new(2, "Expense", 40.0, "groceries"));
        ledger.transactions.push(Transaction::new(3, "income", 10.0, "interest"));

        let summary = ledger.summarize();
        assert_eq!(summary.income_total, 110.0);
        assert_eq!(summary.expense_total, 40.0);
        assert_eq!(summary.net_flow(), 70.0);
    }

    #[test]
    fn summary_ignores_other_categories() {
        let mut ledger = Ledger::new(None);
        ledger.transactions.push(Transaction::new(1, "Income", 100.0, "salary"));
        ledger.transactions.push(Transaction::new(2, "Transfer", 55.0, "to savings"));

        let summary = ledger.summarize();
        assert_eq!(summary.income_total, 100.0);
        assert_eq!(summary.expense_total, 0.0);
    }
}
