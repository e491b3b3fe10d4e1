//! The view-models exchanged with the finance backend.
//!
//! Nothing here is persisted by this crate. Every value is either decoded from
//! a backend response and rendered as-is, or built from a submitted form and
//! sent straight to the backend.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

/// The ID the backend assigns to a transaction.
pub type TransactionId = i64;

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received, e.g. salary.
    Entrada,
    /// Money spent, e.g. rent.
    Saida,
}

impl TransactionKind {
    /// The value used on the wire and in form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Entrada => "entrada",
            TransactionKind::Saida => "saida",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a transaction was (or will be) paid.
///
/// The backend only accepts the four known methods, but any other value it
/// sends back is kept verbatim in [PaymentMethod::Other] so it can still be
/// displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    /// Instant bank transfer.
    Pix,
    /// Credit card.
    CreditCard,
    /// Debit card.
    Debit,
    /// Cash.
    Cash,
    /// A method this crate does not know about.
    Other(String),
}

impl PaymentMethod {
    /// All the methods a user can pick when creating a transaction.
    pub const SELECTABLE: [PaymentMethod; 4] = [
        PaymentMethod::Pix,
        PaymentMethod::CreditCard,
        PaymentMethod::Debit,
        PaymentMethod::Cash,
    ];

    /// The value used on the wire and in form fields.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::CreditCard => "cartao_credito",
            PaymentMethod::Debit => "debito",
            PaymentMethod::Cash => "dinheiro",
            PaymentMethod::Other(value) => value,
        }
    }

    /// The human readable label, falling back to the raw value for unknown
    /// methods.
    pub fn label(&self) -> &str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::CreditCard => "Cartão de crédito",
            PaymentMethod::Debit => "Débito",
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Other(value) => value,
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pix" => PaymentMethod::Pix,
            "cartao_credito" => PaymentMethod::CreditCard,
            "debito" => PaymentMethod::Debit,
            "dinheiro" => PaymentMethod::Cash,
            _ => PaymentMethod::Other(value),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

/// A transaction as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The backend's ID for the transaction.
    pub id: TransactionId,
    /// The amount, always positive. [Transaction::tipo] gives the direction.
    pub valor: f64,
    /// The date the transaction happened or is due.
    pub data: Date,
    /// Inflow or outflow.
    pub tipo: TransactionKind,
    /// Free text category, e.g. "Mercado".
    pub categoria: String,
    /// How the transaction is paid.
    pub forma_pagamento: PaymentMethod,
    /// Optional free text.
    #[serde(default)]
    pub descricao: Option<String>,
    /// Whether the transaction has been paid (outflow) or received (inflow).
    pub pago: bool,
}

/// A pending payable or receivable shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingItem {
    /// The backend's ID for the underlying transaction.
    pub id: TransactionId,
    /// The amount due.
    pub valor: f64,
    /// The due date.
    pub data: Date,
    /// Free text category.
    pub categoria: String,
    /// Optional free text.
    #[serde(default)]
    pub descricao: Option<String>,
    /// How the item is paid.
    pub forma_pagamento: PaymentMethod,
    /// Set by the backend when the due date has passed.
    #[serde(default)]
    pub vencida: bool,
}

/// The dashboard totals and pending lists for a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Balance of everything paid or received so far.
    pub saldo_atual: f64,
    /// Total inflow in the selected month.
    pub total_entradas_mes: f64,
    /// Total outflow in the selected month.
    pub total_saidas_mes: f64,
    /// Current balance plus pending receivables minus pending payables.
    pub saldo_futuro: f64,
    /// Pending outflows, oldest first.
    #[serde(default)]
    pub contas_pagar: Vec<PendingItem>,
    /// Pending inflows, oldest first.
    #[serde(default)]
    pub contas_receber: Vec<PendingItem>,
}

/// The body of a request to create a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The amount, must be positive.
    pub valor: f64,
    /// The date the transaction happened or is due.
    pub data: Date,
    /// Inflow or outflow.
    pub tipo: TransactionKind,
    /// Free text category.
    pub categoria: String,
    /// How the transaction is paid.
    pub forma_pagamento: PaymentMethod,
    /// Sent as `null` when the user left the description empty.
    pub descricao: Option<String>,
    /// Whether the transaction is already paid or received.
    pub pago: bool,
}

/// The body of a request to mark a transaction as paid or pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidUpdate {
    /// The new paid state.
    pub pago: bool,
}
