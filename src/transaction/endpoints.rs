//! Route handlers for creating, toggling and deleting transactions.
//!
//! Each handler forwards the mutation to the backend, then responds with the
//! refreshed dashboard content for the filter in the query string and an
//! out-of-band success alert. Failures respond with an error alert.

use axum::{
    extract::{
        FromRef, Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, FormRejection};
use maud::html;
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::Alert,
    controller::{DashboardController, DashboardView},
    dashboard::{dashboard_content, resolve_filter},
    filter::FilterParams,
    model::TransactionId,
    transaction::form::TransactionForm,
};

/// The state needed to change transactions.
#[derive(Clone)]
pub struct TransactionState {
    /// Dispatches mutations and refreshes the dashboard afterwards.
    pub controller: DashboardController,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            controller: state.controller.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The toggle button sends the paid state the row was rendered with.
#[derive(Debug, Deserialize)]
pub struct TogglePaidForm {
    /// Whether the transaction was paid when the row was rendered.
    pub pago: bool,
}

/// A route handler for creating a transaction.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    params: Result<Query<FilterParams>, QueryRejection>,
    form: Result<Form<TransactionForm>, FormRejection>,
) -> Response {
    let result = async {
        let filter = resolve_filter(params, &state.local_timezone)?;
        let Form(form) = form.map_err(form_error)?;

        state
            .controller
            .create_transaction(form.into_new_transaction(), filter)
            .await
    };

    respond(result.await, "Lançamento criado")
}

/// A route handler for flipping the paid state of a transaction.
pub async fn toggle_paid_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
    params: Result<Query<FilterParams>, QueryRejection>,
    form: Result<Form<TogglePaidForm>, FormRejection>,
) -> Response {
    let result = async {
        let Path(transaction_id) = transaction_id.map_err(path_error)?;
        let filter = resolve_filter(params, &state.local_timezone)?;
        let Form(form) = form.map_err(form_error)?;

        state
            .controller
            .toggle_paid(transaction_id, form.pago, filter)
            .await
    };

    respond(result.await, "Lançamento atualizado")
}

/// A route handler for deleting a transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Response {
    let result = async {
        let Path(transaction_id) = transaction_id.map_err(path_error)?;
        let filter = resolve_filter(params, &state.local_timezone)?;

        state
            .controller
            .delete_transaction(transaction_id, filter)
            .await
    };

    respond(result.await, "Lançamento excluído")
}

fn form_error(rejection: FormRejection) -> Error {
    tracing::warn!("could not parse form: {rejection}");
    Error::InvalidRequest(rejection.to_string())
}

fn path_error(rejection: PathRejection) -> Error {
    tracing::warn!("could not parse transaction ID: {rejection}");
    Error::InvalidRequest(rejection.body_text())
}

fn respond(result: Result<DashboardView, Error>, success_message: &str) -> Response {
    let content = result.and_then(|view| dashboard_content(&view));

    match content {
        Ok(content) => {
            let alert = Alert::Success {
                message: success_message.to_owned(),
                details: String::new(),
            };

            html! {
                (content)
                (alert.into_oob_html())
            }
            .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}
