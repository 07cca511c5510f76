//! The edit page and the endpoint for editing an existing transaction.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_INPUT_STYLE, FORM_LABEL_STYLE, FORM_STYLE, base,
    },
    transaction::{KIND_EXPENSE, KIND_INCOME, TransactionId},
};

/// The form data for editing a transaction.
///
/// The ID and amount arrive as text; parsing them, and reporting parse
/// failures, is this layer's job.
#[derive(Debug, Deserialize)]
pub struct EditTransactionForm {
    /// The ID of the transaction to edit.
    pub id: String,
    /// The new transaction kind.
    #[serde(rename = "type")]
    pub kind: String,
    /// The new amount as entered by the user.
    pub amount: String,
    /// The new description.
    pub description: String,
}

/// Render the edit transaction page.
pub async fn get_edit_transaction_page() -> Response {
    edit_transaction_view().into_response()
}

/// A route handler for editing a transaction, redirects to the home page.
///
/// Editing an ID that does not exist is a silent no-op, mirroring the
/// store's behavior; the client is redirected either way. Unparsable IDs or
/// amounts get a 400 Bad Request.
pub async fn edit_transaction_endpoint(
    State(state): State<AppState>,
    Form(form): Form<EditTransactionForm>,
) -> Response {
    let id = match form.id.parse::<TransactionId>() {
        Ok(id) => id,
        Err(_) => return Error::InvalidId(form.id).into_response(),
    };

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

    match manager.edit(id, &form.kind, amount, &form.description) {
        Ok(true) => {}
        Ok(false) => tracing::warn!("edit of unknown transaction {id} ignored"),
        Err(error) => tracing::error!("could not save edited transaction {id}: {error}"),
    }

    Redirect::to(endpoints::ROOT).into_response()
}

fn edit_transaction_view() -> Markup {
    let content = html! {
        h1 { "Edit Transaction" }

        form method="post" action=(endpoints::EDIT) class=(FORM_STYLE)
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

            fieldset class="form-radio-group"
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                label
                {
                    input type="radio" name="type" value=(KIND_INCOME) required checked;
                    " Income"
                }

                label
                {
                    input type="radio" name="type" value=(KIND_EXPENSE) required;
                    " Expense"
                }
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Description"
                    required
                    class=(FORM_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
        }
    };

    base("Edit Transaction", &content)
}


#[cfg(test)]
mod edit_transaction_endpoint_tests {
    use axum::{Form, extract::State, http::StatusCode};
    use tempfile::TempDir;

    use crate::{
        AppState, endpoints,
        test_utils::get_header,
        transaction::{
            FinanceManager, Transaction,
            edit_endpoint::{EditTransactionForm, edit_transaction_endpoint},
        },
    };

    fn get_endpoint_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = FinanceManager::new(temp_dir.path().join("transactions.json"));
        manager.load().expect("Could not load empty store");
        manager
            .add(Transaction::new(1, "Income", 500.0, "salary"))
            .expect("Could not add transaction");

        (AppState::new(manager), temp_dir)
    }

    fn edit_form(id: &str, amount: &str) -> EditTransactionForm {
        EditTransactionForm {
            id: id.to_owned(),
            kind: "Expense".to_owned(),
            amount: amount.to_owned(),
            description: "refund".to_owned(),
        }
    }

    #[tokio::test]
    async fn edits_transaction_and_redirects_home() {
        let (state, _temp_dir) = get_endpoint_state();

        let response =
            edit_transaction_endpoint(State(state.clone()), Form(edit_form("1", "25.5"))).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), endpoints::ROOT);

        let manager = state.manager.lock().unwrap();
        assert_eq!(
            manager.transactions(),
            &[Transaction::new(1, "Expense", 25.5, "refund")]
        );
    }

    #[tokio::test]
    async fn edit_of_unknown_id_redirects_without_changes() {
        let (state, _temp_dir) = get_endpoint_state();

        let response =
            edit_transaction_endpoint(State(state.clone()), Form(edit_form("42", "25.5"))).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let manager = state.manager.lock().unwrap();
        assert_eq!(
            manager.transactions(),
            &[Transaction::new(1, "Income", 500.0, "salary")]
        );
    }

    #[tokio::test]
    async fn rejects_unparsable_id() {
        let (state, _temp_dir) = get_endpoint_state();

        let response =
            edit_transaction_endpoint(State(state.clone()), Form(edit_form("first", "25.5"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_unparsable_amount() {
        let (state, _temp_dir) = get_endpoint_state();

        let response =
            edit_transaction_endpoint(State(state.clone()), Form(edit_form("1", "lots"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let manager = state.manager.lock().unwrap();
        assert_eq!(
            manager.transactions(),
            &[Transaction::new(1, "Income", 500.0, "salary")]
        );
    }
}
