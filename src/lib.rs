//! Controle Financeiro is a web dashboard for a personal finance tracker.
//!
//! This library provides a view server that renders the dashboard as HTML and
//! forwards every read and write to the finance backend's JSON API. The
//! browser drives the page with htmx, so every interaction is a request to
//! this server that responds with freshly rendered HTML.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod controller;
mod currency;
mod dashboard;
mod endpoints;
mod error;
mod filter;
mod html;
mod logging;
mod model;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;
mod timezone;
mod transaction;

pub use api::{FinanceApi, HttpFinanceApi};
pub use app_state::AppState;
pub use controller::{DashboardController, DashboardView};
pub use error::Error;
pub use filter::{MonthFilter, TransactionFilter};
pub use logging::logging_middleware;
pub use model::{
    DashboardSummary, NewTransaction, PaymentMethod, PendingItem, Transaction, TransactionId,
    TransactionKind,
};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
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
