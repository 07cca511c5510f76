//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    transaction::{
        api::{get_summary, get_transactions},
        create_endpoint::create_transaction_endpoint,
        delete_endpoint::{delete_transaction_endpoint, get_delete_transaction_page},
        edit_endpoint::{edit_transaction_endpoint, get_edit_transaction_page},
        transactions_page::get_transactions_page,
    },
};

/// Return a router with all the app's routes.
///
/// Requests with the wrong method for a route get axum's automatic
/// 405 Method Not Allowed.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(endpoints::ADD, post(create_transaction_endpoint))
        .route(
            endpoints::EDIT,
            get(get_edit_transaction_page).post(edit_transaction_endpoint),
        )
        .route(
            endpoints::DELETE,
            get(get_delete_transaction_page).post(delete_transaction_endpoint),
        )
        .route(endpoints::SUMMARY_API, get(get_summary))
        .route(endpoints::TRANSACTIONS_API, get(get_transactions))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .with_state(state)
}
