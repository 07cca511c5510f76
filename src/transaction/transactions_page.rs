//! Defines the route handler for the home page, which displays the
//! transaction list, the summary totals and the new-transaction form.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_INPUT_STYLE, FORM_LABEL_STYLE, FORM_STYLE, LINK_STYLE, base,
        format_currency,
    },
    transaction::{KIND_EXPENSE, KIND_INCOME, Summary, Transaction},
};

/// A route handler for the home page.
pub async fn get_transactions_page(State(state): State<AppState>) -> Response {
    let manager = match state.manager.lock() {
        Ok(manager) => manager,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLock.into_response();
        }
    };

    let summary = manager.summarize();

    transactions_view(manager.transactions(), summary).into_response()
}

fn transactions_view(transactions: &[Transaction], summary: Summary) -> Markup {
    let content = html! {
        h1 { "Tally" }

        (summary_view(summary))

        section
        {
            h2 { "New Transaction" }
            (new_transaction_form_view())
        }

        section
        {
            h2 { "Transactions" }

            @if transactions.is_empty() {
                p { "No transactions yet." }
            } @else {
                table class="transactions"
                {
                    thead
                    {
                        tr
                        {
                            th { "ID" }
                            th { "Type" }
                            th { "Amount" }
                            th { "Description" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions
                        {
                            tr
                            {
                                td { (transaction.id) }
                                td { (transaction.kind) }
                                td { (format_currency(transaction.amount)) }
                                td { (transaction.note) }
                            }
                        }
                    }
                }
            }

            p
            {
                a href=(endpoints::EDIT) class=(LINK_STYLE) { "Edit a transaction" }
                " | "
                a href=(endpoints::DELETE) class=(LINK_STYLE) { "Delete a transaction" }
            }
        }
    };

    base("Transactions", &content)
}

fn summary_view(summary: Summary) -> Markup {
    html! {
        section class="summary"
        {
            div class="summary-card"
            {
                h2 { "Income" }
                p { (format_currency(summary.income_total)) }
            }

            div class="summary-card"
            {
                h2 { "Expenses" }
                p { (format_currency(summary.expense_total)) }
            }

            div class="summary-card"
            {
                h2 { "Net Flow" }
                p { (format_currency(summary.net_flow)) }
            }
        }
    }
}

fn new_transaction_form_view() -> Markup {
    html! {
        form method="post" action=(endpoints::ADD) class=(FORM_STYLE)
        {
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

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}

#[cfg(test)]
mod transactions_page_tests {
    use axum::{extract::State, http::StatusCode};
    use tempfile::TempDir;

    use crate::{
        AppState, endpoints,
        test_utils::{
            assert_form_endpoint, assert_form_input, assert_form_submit_button,
            assert_valid_html, must_get_form, parse_html_document,
        },
        transaction::{FinanceManager, Transaction, transactions_page::get_transactions_page},
    };

    fn get_page_state(transactions: &[Transaction]) -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = FinanceManager::new(temp_dir.path().join("transactions.json"));
        manager.load().expect("Could not load empty store");

        for transaction in transactions {
            manager
                .add(transaction.clone())
                .expect("Could not add transaction");
        }

        (AppState::new(manager), temp_dir)
    }

    #[tokio::test]
    async fn renders_new_transaction_form() {
        let (state, _temp_dir) = get_page_state(&[]);

        let response = get_transactions_page(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_form_endpoint(&form, endpoints::ADD, "post");
        assert_form_input(&form, "type", "radio");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "description", "text");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn renders_transaction_rows_and_summary() {
        let (state, _temp_dir) = get_page_state(&[
            Transaction::new(1, "Income", 500.0, "salary"),
            Transaction::new(2, "Expense", 120.5, "groceries"),
        ]);

        let response = get_transactions_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let text = html.html();
        assert!(text.contains("salary"), "want a row for the salary record");
        assert!(
            text.contains("groceries"),
            "want a row for the groceries record"
        );
        assert!(text.contains("$500.00"), "want the income total rendered");
        assert!(text.contains("$379.50"), "want the net flow rendered");
    }

    #[tokio::test]
    async fn renders_empty_state_without_table() {
        let (state, _temp_dir) = get_page_state(&[]);

        let response = get_transactions_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert!(html.html().contains("No transactions yet."));
    }
}
