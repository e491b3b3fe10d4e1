//! The client side of the finance backend's HTTP API.
//!
//! Handlers and the controller only see the [FinanceApi] trait so tests can
//! swap in an in-memory double for the real HTTP client.

mod http;

use async_trait::async_trait;

pub use http::HttpFinanceApi;

use crate::{
    Error,
    filter::{MonthFilter, TransactionFilter},
    model::{DashboardSummary, NewTransaction, Transaction, TransactionId},
};

/// The operations the views need from the finance backend.
///
/// Mutations return `Ok(())` only when the backend accepted the change. The
/// response bodies of mutations are not used.
#[async_trait]
pub trait FinanceApi: Send + Sync {
    /// `GET /api/dashboard?month=M&year=Y`
    async fn dashboard(&self, period: MonthFilter) -> Result<DashboardSummary, Error>;

    /// `GET /api/transactions?month=M&year=Y`, plus any optional filters.
    async fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error>;

    /// `POST /api/transactions`
    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), Error>;

    /// `PATCH /api/transactions/{id}` with `{ "pago": paid }`
    async fn set_paid(&self, id: TransactionId, paid: bool) -> Result<(), Error>;

    /// `DELETE /api/transactions/{id}`
    async fn delete_transaction(&self, id: TransactionId) -> Result<(), Error>;
}
