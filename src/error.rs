//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{alert::Alert, html::error_view};

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backend answered with a status code outside of 2xx.
    #[error("the backend responded to {method} {path} with status {status}")]
    BackendStatus {
        /// The HTTP method of the request, e.g. "PATCH".
        method: String,
        /// The request path, without the backend's base URL.
        path: String,
        /// The status code the backend responded with.
        status: u16,
    },

    /// The request never got a response, e.g. the backend is down or the
    /// request timed out.
    #[error("could not reach the backend: {0}")]
    BackendUnavailable(String),

    /// The backend's response body did not match the expected shape.
    #[error("could not decode the backend response for {path}: {reason}")]
    InvalidResponse {
        /// The request path, without the backend's base URL.
        path: String,
        /// The decoding error.
        reason: String,
    },

    /// The backend base URL could not be used to build request URLs.
    #[error("invalid backend URL \"{0}\"")]
    InvalidBackendUrl(String),

    /// The browser sent a query string or form the handlers could not parse.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A filter could not be encoded as a query string.
    #[error("could not encode the query string: {0}")]
    InvalidQuery(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl Error {
    /// The status code to send to the browser for this error.
    ///
    /// Failures of the backend are reported as a bad gateway since this
    /// server only relays them.
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BackendStatus { status, .. } if *status == 404 => StatusCode::NOT_FOUND,
            Error::BackendStatus { status, .. } if *status == 422 || *status == 400 => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::BackendStatus { .. }
            | Error::BackendUnavailable(_)
            | Error::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::InvalidBackendUrl(_)
            | Error::InvalidQuery(_)
            | Error::InvalidTimezoneError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A short message and a hint for the user.
    fn describe(&self) -> (&'static str, String) {
        match self {
            Error::BackendStatus { status: 404, .. } => (
                "Lançamento não encontrado",
                "O lançamento pode já ter sido excluído. Atualize a página.".to_owned(),
            ),
            Error::BackendStatus {
                status: 400 | 422, ..
            } => (
                "Dados inválidos",
                "O servidor recusou os dados enviados. Confira os campos e tente novamente."
                    .to_owned(),
            ),
            Error::BackendStatus { status, .. } => (
                "Erro no servidor",
                format!("O servidor de dados respondeu com o status {status}."),
            ),
            Error::BackendUnavailable(_) => (
                "Servidor indisponível",
                "Não foi possível contatar o servidor de dados. Tente novamente mais tarde."
                    .to_owned(),
            ),
            Error::InvalidResponse { .. } => (
                "Resposta inválida",
                "O servidor de dados enviou uma resposta inesperada.".to_owned(),
            ),
            Error::InvalidRequest(_) => (
                "Dados inválidos",
                "Não foi possível ler os dados enviados. Confira os campos e tente novamente."
                    .to_owned(),
            ),
            Error::InvalidTimezoneError(timezone) => (
                "Fuso horário inválido",
                format!(
                    "Não foi possível obter o fuso horário \"{timezone}\". \
                    Verifique a configuração do servidor."
                ),
            ),
            Error::InvalidBackendUrl(_) | Error::InvalidQuery(_) => (
                "Algo deu errado",
                "Ocorreu um erro inesperado. Verifique os logs do servidor.".to_owned(),
            ),
        }
    }

    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// Use this for htmx requests that swap a fragment into the page.
    pub fn into_alert_response(self) -> Response {
        tracing::error!("{self}");

        let status_code = self.status_code();
        let (message, details) = self.describe();
        let alert = Alert::Error {
            message: message.to_owned(),
            details,
        };

        (status_code, alert.into_html()).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{self}");

        let status_code = self.status_code();
        let (message, details) = self.describe();
        let page = error_view(message, status_code.as_str(), message, &details);

        (status_code, Html(page.into_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::test_utils::{assert_valid_html, parse_html_document, parse_html_fragment};

    use super::Error;

    #[tokio::test]
    async fn backend_failure_renders_bad_gateway_page() {
        let response = Error::BackendUnavailable("connection refused".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Servidor indisponível"));
    }

    #[tokio::test]
    async fn missing_transaction_renders_not_found_alert() {
        let response = Error::BackendStatus {
            method: "DELETE".to_owned(),
            path: "/api/transactions/9".to_owned(),
            status: 404,
        }
        .into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Lançamento não encontrado"));
    }

    #[test]
    fn unparsable_request_is_bad_request() {
        let error = Error::InvalidRequest("missing field `valor`".to_owned());

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn rejected_input_maps_to_unprocessable_entity() {
        let error = Error::BackendStatus {
            method: "POST".to_owned(),
            path: "/api/transactions".to_owned(),
            status: 422,
        };

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
