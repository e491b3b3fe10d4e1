//! Route handlers for the dashboard page and its refreshable content.

use axum::{
    extract::{FromRef, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use axum_htmx::HxPushUrl;

use crate::{
    AppState, Error,
    controller::DashboardController,
    dashboard::view::{dashboard_content, dashboard_page},
    endpoints,
    filter::{FilterParams, TransactionFilter},
    timezone::local_today,
};

/// The state needed for displaying the dashboard.
#[derive(Clone)]
pub struct DashboardState {
    /// Fetches the summary and the transaction list.
    pub controller: DashboardController,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            controller: state.controller.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Resolve the filter from a view request's query string, defaulting to the
/// current month in `local_timezone`.
pub(crate) fn resolve_filter(
    params: Result<Query<FilterParams>, QueryRejection>,
    local_timezone: &str,
) -> Result<TransactionFilter, Error> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!("could not parse filter: {rejection}");
        Error::InvalidRequest(rejection.body_text())
    })?;

    params.resolve(local_today(local_timezone)?)
}

/// Display the dashboard for the month in the query string, or the current
/// month.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Response, Error> {
    let filter = resolve_filter(params, &state.local_timezone)?;
    let view = state.controller.refresh(filter).await?;

    Ok(dashboard_page(&view)?.into_response())
}

/// Re-fetch and render the dashboard content for the submitted filter.
///
/// The browser's URL is updated to the matching dashboard page so reloading
/// keeps the filter.
pub async fn get_dashboard_content(
    State(state): State<DashboardState>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Response {
    let content = async {
        let filter = resolve_filter(params, &state.local_timezone)?;
        let view = state.controller.refresh(filter).await?;
        let page_url = filter.url_for(endpoints::DASHBOARD_VIEW)?;

        Ok::<_, Error>((HxPushUrl(page_url), dashboard_content(&view)?))
    };

    match content.await {
        Ok(content) => content.into_response(),
        Err(error) => error.into_alert_response(),
    }
}
