//! The endpoint for creating a transaction from the home page form.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{AppState, Error, endpoints, transaction::Transaction};

/// The form data for creating a transaction.
///
/// The amount arrives as text so that numeric parsing, and its error
/// reporting, stay the responsibility of this layer rather than the store.
#[derive(Debug, Deserialize)]
pub struct NewTransactionForm {
    /// The transaction kind, nominally "Income" or "Expense".
    #[serde(rename = "type")]
    pub kind: String,
    /// The transaction amount as entered by the user.
    pub amount: String,
    /// A text description of the transaction.
    pub description: String,
}

/// A route handler for creating a transaction, redirects to the home page on
/// success.
///
/// Responds with 400 Bad Request if the amount cannot be parsed as a number.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Form(form): Form<NewTransactionForm>,
) -> Response {
    let amount = match form.amount.parse::<f64>() {
        Ok(amount) => amount,
        Err(_) => return Error::InvalidAmount(form.amount).into_response(),
    };

    let mut manager = match state.manager.lock() {
        Ok(manager) => manager,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLock.into_response();
        }
    };

    // next_id and add must happen under the same lock guard, otherwise two
    // requests can be handed the same ID.
    let transaction = Transaction::new(manager.next_id(), &form.kind, amount, &form.description);

    if let Err(error) = manager.add(transaction) {
        // The transaction is still live in memory; save failures are logged
        // and the client is redirected as usual.
        tracing::error!("could not save new transaction: {error}");
    }

    Redirect::to(endpoints::ROOT).into_response()
}
