//! Implements a struct that holds the state of the view server.

use std::sync::Arc;

use crate::{Error, api::FinanceApi, controller::DashboardController, timezone::get_local_offset};

/// The state of the view server.
#[derive(Clone)]
pub struct AppState {
    /// Fetches dashboard data and dispatches mutations to the backend.
    pub controller: DashboardController,

    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that talks to the backend through `api`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "America/Sao_Paulo". It decides which month is shown by default.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is unknown.
    pub fn new(api: Arc<dyn FinanceApi>, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            controller: DashboardController::new(api),
            local_timezone: local_timezone.to_owned(),
        })
    }
}
