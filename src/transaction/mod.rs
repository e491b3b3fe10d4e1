//! Transactions on the dashboard.
//!
//! This module contains:
//! - The create form and the form data it submits
//! - The transaction table with per-row toggle and delete controls
//! - The route handlers for the mutations

mod endpoints;
mod form;
mod table;

pub use endpoints::{
    create_transaction_endpoint, delete_transaction_endpoint, toggle_paid_endpoint,
};
pub use form::transaction_form;
pub use table::transaction_table;
