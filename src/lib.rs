//! Tally is a small web app for tracking personal income and expenses.
//!
//! Transactions live in an in-memory list behind a single lock and are
//! written back to a flat JSON file after every change. This library
//! provides the store, the HTML pages and the two read-only JSON endpoints;
//! the `server` binary wires them to an HTTP listener.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod endpoints;
mod html;
mod routing;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use routing::build_router;
pub use transaction::{FinanceManager, Summary, Transaction};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Reading or writing the ledger file failed.
    ///
    /// The payload is the stringified I/O error. The store keeps whatever
    /// in-memory state it has; callers may log this and continue running.
    #[error("ledger file operation failed: {0}")]
    Io(String),

    /// The ledger file contents could not be parsed as a transaction list.
    ///
    /// Load failures are not fatal. The store continues with its
    /// best-effort state, which may be an empty collection.
    #[error("could not parse the ledger file: {0}")]
    MalformedLedger(String),

    /// The client supplied an amount that could not be parsed as a number.
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),

    /// The client supplied a transaction ID that could not be parsed as an
    /// integer.
    #[error("invalid transaction ID {0:?}")]
    InvalidId(String),

    /// Could not acquire the ledger lock.
    #[error("could not acquire the ledger lock")]
    LedgerLock,
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::MalformedLedger(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidAmount(_) => {
                (StatusCode::BAD_REQUEST, "Invalid amount").into_response()
            }
            Error::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid ID").into_response(),
            // The remaining errors are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
            }
        }
    }
}
