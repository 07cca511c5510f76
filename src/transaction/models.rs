//! Defines the core data models for transactions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// The transaction kind that counts towards the income total.
pub const KIND_INCOME: &str = "Income";

/// The transaction kind that counts towards the expense total.
pub const KIND_EXPENSE: &str = "Expense";

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// The kind is stored as free text. [KIND_INCOME] and [KIND_EXPENSE] are the
/// recognized values; anything else is accepted but contributes to neither
/// summary total.
///
/// On disk and over the wire the fields are named `id`, `type`, `amount` and
/// `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, unique within the store.
    pub id: TransactionId,
    /// The kind of transaction, nominally "Income" or "Expense".
    #[serde(rename = "type")]
    pub kind: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    #[serde(rename = "description")]
    pub note: String,
}

impl Transaction {
    /// Create a new transaction with exactly the given fields.
    ///
    /// No validation is performed. IDs are conventionally obtained from
    /// [FinanceManager::next_id](crate::FinanceManager::next_id).
    pub fn new(id: TransactionId, kind: &str, amount: f64, note: &str) -> Self {
        Self {
            id,
            kind: kind.to_owned(),
            amount,
            note: note.to_owned(),
        }
    }
}

impl Display for Transaction {
    /// Formats the transaction as a four-line diagnostic summary with the
    /// amount rendered to exactly two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction {}\nType: {}\nAmount: {:.2}\nDescription: {}\n",
            self.id, self.kind, self.amount, self.note
        )
    }
}

/// Aggregate totals over the whole transaction collection.
///
/// Serialized with PascalCase keys (`IncomeTotal`, `ExpenseTotal`,
/// `NetFlow`) to keep the summary API stable for existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Summary {
    /// The sum of all "Income" transaction amounts.
    pub income_total: f64,
    /// The sum of all "Expense" transaction amounts.
    pub expense_total: f64,
    /// Income total minus expense total.
    pub net_flow: f64,
}
