//! The delete page and the endpoint for deleting a transaction.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_INPUT_STYLE, FORM_LABEL_STYLE, FORM_STYLE, base},
    transaction::TransactionId,
};

/// The form data for deleting a transaction.
#[derive(Debug, Deserialize)]
pub struct DeleteTransactionForm {
    /// The ID of the transaction to delete.
    pub id: String,
}

/// Render the delete transaction page.
pub async fn get_delete_transaction_page() -> Response {
    delete_transaction_view().into_response()
}

/// A route handler for deleting a transaction, redirects to the home page.
///
/// Deleting an ID that does not exist is a silent no-op, mirroring the
/// store's behavior; the client is redirected either way. An unparsable ID
/// gets a 400 Bad Request.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Form(form): Form<DeleteTransactionForm>,
) -> Response {
    let id = match form.id.parse::<TransactionId>() {
        Ok(id) => id,
        Err(_) => return Error::InvalidId(form.id).into_response(),
    };

    let mut manager = match state.manager.lock() {
        Ok(manager) => manager,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLock.into_response();
        }
    };

    match manager.delete(id) {
        Ok(true) => {}
        Ok(false) => tracing::warn!("delete of unknown transaction {id} ignored"),
        Err(error) => tracing::error!("could not save ledger after deleting {id}: {error}"),
    }

    Redirect::to(endpoints::ROOT).into_response()
}

fn delete_transaction_view() -> Markup {
    let content = html! {
        h1 { "Delete Transaction" }

        form method="post" action=(endpoints::DELETE) class=(FORM_STYLE)
        {
            div
            {
                label for="id" class=(FORM_LABEL_STYLE) { "Transaction ID" }
                input
                    id="id"
                    type="number"
                    name="id"
                    min="1"
                    step="1"
                    required
                    autofocus
                    class=(FORM_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Delete Transaction" }
        }
    };

    base("Delete Transaction", &content)
}
