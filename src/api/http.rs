//! [FinanceApi] over HTTP with `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::{
    Error,
    api::FinanceApi,
    endpoints::{self, format_endpoint},
    filter::{MonthFilter, TransactionFilter},
    model::{DashboardSummary, NewTransaction, PaidUpdate, Transaction, TransactionId},
};

/// Talks to the finance backend at a base URL, e.g. `http://127.0.0.1:8000`.
///
/// Every call is a single request: no caching, retries or request
/// correlation. The client is cheap to clone and shares its connection pool.
#[derive(Debug, Clone)]
pub struct HttpFinanceApi {
    base_url: String,
    client: Client,
}

impl HttpFinanceApi {
    /// Create a client for the backend at `base_url`.
    ///
    /// `request_timeout` bounds each request from connecting to reading the
    /// body.
    ///
    /// # Errors
    /// Returns [Error::InvalidBackendUrl] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, Error> {
        let base_url = base_url.trim_end_matches('/');

        match Url::parse(base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => return Err(Error::InvalidBackendUrl(base_url.to_owned())),
        }

        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|error| Error::BackendUnavailable(error.to_string()))?;

        Ok(Self {
            base_url: base_url.to_owned(),
            client,
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{path}", self.base_url))
    }

    /// Send `request` and fail on transport errors and non-2xx statuses.
    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, Error> {
        tracing::debug!("sending {method} {path} to the backend");

        let response = request.send().await.map_err(|error| {
            tracing::error!("{method} {path} failed: {error}");
            Error::BackendUnavailable(error.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BackendStatus {
                method: method.to_string(),
                path: path.to_owned(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let request = self.request(Method::GET, path);
        let response = self.send(Method::GET, path, request).await?;

        response
            .json::<T>()
            .await
            .map_err(|error| Error::InvalidResponse {
                path: path.to_owned(),
                reason: error.to_string(),
            })
    }
}

#[async_trait]
impl FinanceApi for HttpFinanceApi {
    async fn dashboard(&self, period: MonthFilter) -> Result<DashboardSummary, Error> {
        let path = format!("{}?{}", endpoints::API_DASHBOARD, period.to_query_string()?);

        self.get_json(&path).await
    }

    async fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error> {
        let path = format!(
            "{}?{}",
            endpoints::API_TRANSACTIONS,
            filter.to_query_string()?
        );

        self.get_json(&path).await
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), Error> {
        let path = endpoints::API_TRANSACTIONS;
        let request = self.request(Method::POST, path).json(transaction);

        self.send(Method::POST, path, request).await.map(|_| ())
    }

    async fn set_paid(&self, id: TransactionId, paid: bool) -> Result<(), Error> {
        let path = format_endpoint(endpoints::API_TRANSACTION, id);
        let request = self
            .request(Method::PATCH, &path)
            .json(&PaidUpdate { pago: paid });

        self.send(Method::PATCH, &path, request).await.map(|_| ())
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        let path = format_endpoint(endpoints::API_TRANSACTION, id);
        let request = self.request(Method::DELETE, &path);

        self.send(Method::DELETE, &path, request).await.map(|_| ())
    }
}
