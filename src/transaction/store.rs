//! The file-backed transaction store.

use std::{fs, path::PathBuf};

use crate::{
    Error,
    transaction::models::{KIND_EXPENSE, KIND_INCOME, Summary, Transaction, TransactionId},
};

/// The sole owner of the transaction collection and its backing JSON file.
///
/// The collection is insertion-ordered and every mutation rewrites the whole
/// file synchronously before returning. Request handlers share a manager
/// through `Arc<Mutex<FinanceManager>>` (see
/// [AppState](crate::AppState)); all reads and mutations, including the file
/// write, happen while that one lock is held.
///
/// The file rewrite is not atomic. A crash mid-write can corrupt the ledger
/// file. This is an accepted limitation.
#[derive(Debug)]
pub struct FinanceManager {
    transactions: Vec<Transaction>,
    file_path: PathBuf,
}

impl FinanceManager {
    /// Create a manager with an empty collection backed by the file at
    /// `file_path`.
    ///
    /// Call [FinanceManager::load] to read any previously persisted state.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            transactions: Vec::new(),
            file_path: file_path.into(),
        }
    }

    /// Read the transaction collection from the backing file.
    ///
    /// If the file does not exist, any missing parent directories are
    /// created and an empty collection is written to it. An existing but
    /// empty file is treated as an empty collection.
    ///
    /// # Errors
    /// Returns [Error::Io] if the file cannot be read or created, or
    /// [Error::MalformedLedger] if its contents cannot be parsed. Neither is
    /// fatal: the collection keeps its best-effort state and the manager
    /// remains usable.
    pub fn load(&mut self) -> Result<(), Error> {
        if !self.file_path.exists() {
            if let Some(parent) = self.file_path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }

            return self.save();
        }

        let contents = fs::read_to_string(&self.file_path)?;

        if contents.trim().is_empty() {
            self.transactions = Vec::new();
            return Ok(());
        }

        self.transactions = serde_json::from_str(&contents)?;

        Ok(())
    }

    /// Write the whole collection to the backing file as indented JSON,
    /// preserving insertion order.
    ///
    /// # Errors
    /// Returns [Error::Io] if the file cannot be written.
    pub fn save(&self) -> Result<(), Error> {
        let contents = serde_json::to_string_pretty(&self.transactions)?;
        fs::write(&self.file_path, contents)?;

        Ok(())
    }

    /// The ID to assign to the next transaction.
    ///
    /// Returns 1 for an empty collection, otherwise one more than the ID of
    /// the last element in insertion order. This assumes the last element
    /// holds the current maximum ID, which holds as long as elements are
    /// only ever appended with IDs from this function.
    ///
    /// Must be called under the same lock guard as the
    /// [add](FinanceManager::add) that uses the ID, otherwise two callers
    /// can be handed the same ID.
    pub fn next_id(&self) -> TransactionId {
        match self.transactions.last() {
            Some(transaction) => transaction.id + 1,
            None => 1,
        }
    }

    /// Append `transaction` to the collection and save.
    ///
    /// The transaction's ID must already be assigned by the caller,
    /// conventionally via [next_id](FinanceManager::next_id).
    ///
    /// # Errors
    /// Returns [Error::Io] if saving the collection fails. The transaction
    /// is still part of the in-memory collection in that case.
    pub fn add(&mut self, transaction: Transaction) -> Result<(), Error> {
        self.transactions.push(transaction);
        self.save()
    }

    /// Overwrite the kind, amount and note of the first transaction whose
    /// ID matches, then save. The ID itself is never changed.
    ///
    /// Returns `Ok(true)` if a transaction was updated and `Ok(false)` if no
    /// transaction has the given ID. The unknown-ID case mutates nothing and
    /// does not touch the file.
    ///
    /// # Errors
    /// Returns [Error::Io] if saving the collection fails.
    pub fn edit(
        &mut self,
        id: TransactionId,
        kind: &str,
        amount: f64,
        note: &str,
    ) -> Result<bool, Error> {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(transaction) => {
                transaction.kind = kind.to_owned();
                transaction.amount = amount;
                transaction.note = note.to_owned();

                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first transaction whose ID matches, preserving the
    /// relative order of the remainder, then save.
    ///
    /// Returns `Ok(true)` if a transaction was removed and `Ok(false)` if no
    /// transaction has the given ID. The unknown-ID case mutates nothing and
    /// does not touch the file.
    ///
    /// # Errors
    /// Returns [Error::Io] if saving the collection fails.
    pub fn delete(&mut self, id: TransactionId) -> Result<bool, Error> {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(index) => {
                self.transactions.remove(index);

                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The full transaction collection in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Render every transaction with its four-line diagnostic summary.
    ///
    /// Only used for debug logging, not part of any external interface.
    pub fn list(&self) -> String {
        self.transactions
            .iter()
            .map(Transaction::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Total income, total expenses and net flow over the collection.
    ///
    /// Amounts of "Income" transactions accumulate into the income total,
    /// "Expense" amounts into the expense total, and transactions of any
    /// other kind count towards neither.
    pub fn summarize(&self) -> Summary {
        let mut income_total = 0.0;
        let mut expense_total = 0.0;

        for transaction in &self.transactions {
            if transaction.kind == KIND_INCOME {
                income_total += transaction.amount;
            } else if transaction.kind == KIND_EXPENSE {
                expense_total += transaction.amount;
            }
        }

        Summary {
            income_total,
            expense_total,
            net_flow: income_total - expense_total,
        }
    }
}
