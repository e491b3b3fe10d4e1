//! Dashboard module
//!
//! Provides the overview page: month filter, balance totals, pending
//! payables and receivables, the create form and the transaction table.

mod handlers;
mod summary;
mod view;

pub use handlers::{get_dashboard_content, get_dashboard_page};
pub(crate) use handlers::resolve_filter;
pub use view::dashboard_content;
