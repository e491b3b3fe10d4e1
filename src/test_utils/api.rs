//! An in-memory [FinanceApi] that records every call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Barrier;
use time::macros::date;

use crate::{
    Error,
    api::FinanceApi,
    filter::{MonthFilter, TransactionFilter},
    model::{
        DashboardSummary, NewTransaction, PaymentMethod, PendingItem, Transaction, TransactionId,
        TransactionKind,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    Dashboard(MonthFilter),
    Transactions(TransactionFilter),
    Create(NewTransaction),
    SetPaid { id: TransactionId, paid: bool },
    Delete(TransactionId),
}

pub(crate) struct RecordingApi {
    calls: Mutex<Vec<ApiCall>>,
    summary: DashboardSummary,
    transactions: Vec<Transaction>,
    fetch_error: Option<Error>,
    mutation_error: Option<Error>,
    fetch_barrier: Option<Arc<Barrier>>,
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            summary: DashboardSummary {
                saldo_atual: 0.0,
                total_entradas_mes: 0.0,
                total_saidas_mes: 0.0,
                saldo_futuro: 0.0,
                contas_pagar: Vec::new(),
                contas_receber: Vec::new(),
            },
            transactions: Vec::new(),
            fetch_error: None,
            mutation_error: None,
            fetch_barrier: None,
        }
    }
}

impl RecordingApi {
    pub(crate) fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            ..Default::default()
        }
    }

    pub(crate) fn with_summary(summary: DashboardSummary) -> Self {
        Self {
            summary,
            ..Default::default()
        }
    }

    pub(crate) fn failing_fetches(error: Error) -> Self {
        Self {
            fetch_error: Some(error),
            ..Default::default()
        }
    }

    pub(crate) fn failing_mutations(error: Error) -> Self {
        Self {
            mutation_error: Some(error),
            ..Default::default()
        }
    }

    /// Both fetches block until the other one has started, so fetching them
    /// one after the other never completes.
    pub(crate) fn with_fetch_barrier() -> Self {
        Self {
            fetch_barrier: Some(Arc::new(Barrier::new(2))),
            ..Default::default()
        }
    }

    /// The calls made so far, in the order they were made.
    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().expect("could not lock calls").clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().expect("could not lock calls").push(call);
    }

    async fn wait_for_other_fetch(&self) {
        if let Some(barrier) = &self.fetch_barrier {
            barrier.wait().await;
        }
    }

    fn mutation_result(&self) -> Result<(), Error> {
        match &self.mutation_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FinanceApi for RecordingApi {
    async fn dashboard(&self, period: MonthFilter) -> Result<DashboardSummary, Error> {
        self.record(ApiCall::Dashboard(period));
        self.wait_for_other_fetch().await;

        match &self.fetch_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.summary.clone()),
        }
    }

    async fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error> {
        self.record(ApiCall::Transactions(*filter));
        self.wait_for_other_fetch().await;

        match &self.fetch_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.transactions.clone()),
        }
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), Error> {
        self.record(ApiCall::Create(transaction.clone()));
        self.mutation_result()
    }

    async fn set_paid(&self, id: TransactionId, paid: bool) -> Result<(), Error> {
        self.record(ApiCall::SetPaid { id, paid });
        self.mutation_result()
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        self.record(ApiCall::Delete(id));
        self.mutation_result()
    }
}

pub(crate) fn sample_transaction(id: TransactionId, pago: bool) -> Transaction {
    Transaction {
        id,
        valor: 1234.5,
        data: date!(2024 - 07 - 15),
        tipo: TransactionKind::Saida,
        categoria: "Aluguel".to_owned(),
        forma_pagamento: PaymentMethod::Pix,
        descricao: None,
        pago,
    }
}

pub(crate) fn sample_pending_item(id: TransactionId, vencida: bool) -> PendingItem {
    PendingItem {
        id,
        valor: 250.0,
        data: date!(2024 - 07 - 10),
        categoria: "Luz".to_owned(),
        descricao: Some("Conta de julho".to_owned()),
        forma_pagamento: PaymentMethod::Other("boleto".to_owned()),
        vencida,
    }
}
