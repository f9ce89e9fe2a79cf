use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the HTTP collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to encode query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} returned {status}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("Failed to parse JSON response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors returned by a route lookup.
#[derive(Debug, Error)]
pub enum RouteLookupError {
    /// No application GUID was given; carries the options as pretty JSON.
    #[error("Please provide an appGuid! \n{options}")]
    MissingAppGuid { options: String },

    /// Failure reported by the HTTP collaborator, passed through as-is.
    #[error(transparent)]
    Transport(#[from] ApiError),

    /// The API answered without a body.
    #[error("No routes!")]
    NoRoutes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display_missing_app_guid() {
        let err = RouteLookupError::MissingAppGuid {
            options: "{}".to_string(),
        };
        assert_eq!(err.to_string(), "Please provide an appGuid! \n{}");
    }

    #[test]
    fn test_error_display_no_routes() {
        assert_eq!(RouteLookupError::NoRoutes.to_string(), "No routes!");
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let api_err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            url: "http://cc/v2/apps/a1/routes".to_string(),
            body: "{\"code\":100004}".to_string(),
        };
        let expected = api_err.to_string();

        let err = RouteLookupError::from(api_err);
        assert_eq!(err.to_string(), expected);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_display_status() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            url: "http://cc/v2/apps".to_string(),
            body: "denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "http://cc/v2/apps returned 401 Unauthorized: denied"
        );
    }
}
