//! The transaction domain: data models, the file-backed store, the HTML
//! pages for viewing and changing transactions, and the JSON API.

pub mod api;
pub mod create_endpoint;
pub mod delete_endpoint;
pub mod edit_endpoint;
mod models;
mod store;
pub mod transactions_page;

pub use models::{KIND_EXPENSE, KIND_INCOME, Summary, Transaction, TransactionId};
pub use store::FinanceManager;
