//! Fetches the data behind the dashboard and dispatches mutations.
//!
//! Rendering is a pure function of the last [DashboardView] fetched here:
//! nothing is cached or merged, every mutation is followed by a full refresh.

use std::sync::Arc;

use crate::{
    Error,
    api::FinanceApi,
    filter::TransactionFilter,
    model::{DashboardSummary, NewTransaction, Transaction, TransactionId},
};

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// The filter the data was fetched with.
    pub filter: TransactionFilter,
    /// The totals and pending lists for [DashboardView::filter]'s month.
    pub summary: DashboardSummary,
    /// The transactions matching [DashboardView::filter].
    pub transactions: Vec<Transaction>,
}

/// Coordinates backend calls for the dashboard.
#[derive(Clone)]
pub struct DashboardController {
    api: Arc<dyn FinanceApi>,
}

impl DashboardController {
    /// Create a controller that talks to the backend through `api`.
    pub fn new(api: Arc<dyn FinanceApi>) -> Self {
        Self { api }
    }

    /// Fetch the summary and the transaction list for `filter`.
    ///
    /// Both requests are in flight at the same time. The refresh fails as soon
    /// as either of them fails.
    pub async fn refresh(&self, filter: TransactionFilter) -> Result<DashboardView, Error> {
        let (summary, transactions) = tokio::try_join!(
            self.api.dashboard(filter.period()),
            self.api.transactions(&filter)
        )?;

        tracing::debug!(
            "refreshed dashboard for {:02}/{} with {} transactions",
            filter.month,
            filter.year,
            transactions.len()
        );

        Ok(DashboardView {
            filter,
            summary,
            transactions,
        })
    }

    /// Create a transaction, then refresh.
    pub async fn create_transaction(
        &self,
        transaction: NewTransaction,
        filter: TransactionFilter,
    ) -> Result<DashboardView, Error> {
        self.api
            .create_transaction(&transaction)
            .await
            .inspect_err(|error| {
                tracing::error!("could not create transaction {transaction:?}: {error}")
            })?;

        self.refresh(filter).await
    }

    /// Flip the paid state of a transaction currently marked `currently_paid`,
    /// then refresh.
    pub async fn toggle_paid(
        &self,
        id: TransactionId,
        currently_paid: bool,
        filter: TransactionFilter,
    ) -> Result<DashboardView, Error> {
        self.api
            .set_paid(id, !currently_paid)
            .await
            .inspect_err(|error| tracing::error!("could not update transaction {id}: {error}"))?;

        self.refresh(filter).await
    }

    /// Delete a transaction, then refresh.
    pub async fn delete_transaction(
        &self,
        id: TransactionId,
        filter: TransactionFilter,
    ) -> Result<DashboardView, Error> {
        self.api
            .delete_transaction(id)
            .await
            .inspect_err(|error| tracing::error!("could not delete transaction {id}: {error}"))?;

        self.refresh(filter).await
    }
}
