//! The application's route URIs.

/// The home page, which lists all transactions.
pub const ROOT: &str = "/";
/// The endpoint for creating a new transaction from the home page form.
pub const ADD: &str = "/add";
/// The page and endpoint for editing an existing transaction.
pub const EDIT: &str = "/edit";
/// The page and endpoint for deleting a transaction.
pub const DELETE: &str = "/delete";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route serving the aggregate income/expense/net-flow summary as JSON.
pub const SUMMARY_API: &str = "/api/summary";
/// The route serving the full transaction list as JSON.
pub const TRANSACTIONS_API: &str = "/api/transactions";
