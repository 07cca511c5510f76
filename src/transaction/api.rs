//! The two read-only JSON endpoints: summary totals and the raw
//! transaction list.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error};

/// A route handler serving the income total, expense total and net flow as
/// a JSON object with `IncomeTotal`, `ExpenseTotal` and `NetFlow` keys.
///
/// All three values come from a single pass over the collection under the
/// ledger lock, so they are always consistent with each other.
pub async fn get_summary(State(state): State<AppState>) -> Response {
    let manager = match state.manager.lock() {
        Ok(manager) => manager,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLock.into_response();
        }
    };

    Json(manager.summarize()).into_response()
}

/// A route handler serving the full transaction collection as a bare JSON
/// array, in insertion order.
pub async fn get_transactions(State(state): State<AppState>) -> Response {
    let manager = match state.manager.lock() {
        Ok(manager) => manager,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLock.into_response();
        }
    };

    Json(manager.transactions().to_vec()).into_response()
}
