//! Implements the struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::transaction::FinanceManager;

/// The state of the web server.
///
/// The transaction store is shared behind a single mutex; handlers hold the
/// lock for the full duration of an operation, including the synchronous
/// file write. There is no reader/writer split, only mutual exclusion.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store that owns the transaction collection and its backing file.
    pub manager: Arc<Mutex<FinanceManager>>,
}

impl AppState {
    /// Create a new [AppState] wrapping `manager`.
    ///
    /// The caller is expected to have called
    /// [FinanceManager::load](crate::FinanceManager::load) already, and to
    /// have decided what to do about a load failure (the server binary logs
    /// it and continues with the best-effort state).
    pub fn new(manager: FinanceManager) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
        }
    }
}
