//! The URIs served by this app and the backend API paths it calls.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page with the summary, the transaction form and the transaction list.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The refreshed dashboard content without the surrounding page.
pub const DASHBOARD_CONTENT: &str = "/dashboard/content";
/// The route for creating transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for toggling the paid state of, or deleting, a transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// Liveness check.
pub const HEALTH: &str = "/health";

/// The backend route for the monthly summary.
pub const API_DASHBOARD: &str = "/api/dashboard";
/// The backend route for listing and creating transactions.
pub const API_TRANSACTIONS: &str = "/api/transactions";
/// The backend route for a single transaction.
pub const API_TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}', '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_CONTENT);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::TRANSACTION, 1));
        assert_endpoint_is_valid_uri(endpoints::HEALTH);

        assert_endpoint_is_valid_uri(endpoints::API_DASHBOARD);
        assert_endpoint_is_valid_uri(endpoints::API_TRANSACTIONS);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::API_TRANSACTION, 1));
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::API_TRANSACTION, 42);

        assert_eq!(formatted_path, "/api/transactions/42");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // Parameter with single word should also work.
        let formatted_path = format_endpoint("/hello/{world}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint(endpoints::TRANSACTIONS, 1);

        assert_eq!(formatted_path, endpoints::TRANSACTIONS);
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/transactions/{transaction_id}/paid", 7);

        assert_eq!(formatted_path, "/transactions/7/paid");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
