//! Stateless HTTP request builder and response parser for the Discovery v2 API.
//!
//! # Design
//! `DiscoveryClient` holds only the service URL and the API version and
//! carries no mutable state between calls. Each operation has a `build_*`
//! method that produces an `HttpRequest`; responses go through the generic
//! [`DiscoveryClient::parse_json`] or [`DiscoveryClient::parse_empty`]. The
//! caller (usually `DiscoveryService`) executes the HTTP round-trip in
//! between, keeping this type deterministic and free of I/O.

mod batches;
mod classifiers;
mod collections;
mod documents;
mod enrichments;
mod projects;
mod queries;
mod training;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::builder::RequestBuilder;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{DetailedResponse, HttpResponse};

/// Synchronous, stateless client for the Discovery v2 API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    service_url: String,
    version: String,
}

impl DiscoveryClient {
    /// `version` is required and sent as the `version` argument of every call.
    pub fn new(service_url: &str, version: &str) -> Result<Self, ApiError> {
        if version.trim().is_empty() {
            return Err(ApiError::Config("version must be set".to_string()));
        }
        Ok(Self {
            service_url: service_url.trim_end_matches('/').to_string(),
            version: version.to_string(),
        })
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    fn request(&self, endpoint: &Endpoint, path_params: &[&str]) -> Result<RequestBuilder, ApiError> {
        RequestBuilder::new(&self.service_url, &self.version, endpoint, path_params)
    }

    /// Parse a JSON response. A success with an empty or `null` body yields
    /// `T::default()` rather than an error.
    pub fn parse_json<T>(&self, response: HttpResponse) -> Result<DetailedResponse<T>, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        check_status(&response)?;
        let result = if response.body.trim().is_empty() {
            T::default()
        } else {
            serde_json::from_str::<Option<T>>(&response.body)
                .map_err(|e| ApiError::Deserialization(e.to_string()))?
                .unwrap_or_default()
        };
        Ok(DetailedResponse {
            status: response.status,
            headers: response.headers,
            result,
        })
    }

    /// Parse a response whose body carries nothing of interest.
    pub fn parse_empty(&self, response: HttpResponse) -> Result<DetailedResponse<()>, ApiError> {
        check_status(&response)?;
        Ok(DetailedResponse {
            status: response.status,
            headers: response.headers,
            result: (),
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        message: error_message(&response.body),
    })
}

/// The service reports failures as `{"code": .., "error": ".."}`; fall back
/// to the raw body for anything else.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectDetails;

    fn client() -> DiscoveryClient {
        DiscoveryClient::new("https://example.com/", "2023-03-31").unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("X-Global-Transaction-Id".to_string(), "tx-1".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(client().service_url(), "https://example.com");
        assert_eq!(client().version(), "2023-03-31");
    }

    #[test]
    fn empty_version_is_rejected() {
        assert!(matches!(DiscoveryClient::new("https://example.com", ""), Err(ApiError::Config(_))));
    }

    #[test]
    fn parse_json_success() {
        let parsed: DetailedResponse<ProjectDetails> =
            client().parse_json(response(200, r#"{"project_id":"p1","name":"n"}"#)).unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.result.project_id.as_deref(), Some("p1"));
        assert_eq!(parsed.header("x-global-transaction-id"), Some("tx-1"));
    }

    #[test]
    fn empty_body_yields_default_result() {
        let parsed: DetailedResponse<ProjectDetails> = client().parse_json(response(201, "")).unwrap();
        assert_eq!(parsed.status, 201);
        assert_eq!(parsed.result, ProjectDetails::default());
    }

    #[test]
    fn null_body_yields_default_result() {
        let parsed: DetailedResponse<ProjectDetails> = client().parse_json(response(200, "null")).unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.result, ProjectDetails::default());

        let parsed: DetailedResponse<ProjectDetails> = client().parse_json(response(200, " null\n")).unwrap();
        assert_eq!(parsed.result, ProjectDetails::default());
    }

    #[test]
    fn not_found_maps_to_dedicated_variant() {
        let err = client().parse_json::<ProjectDetails>(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn service_error_message_is_extracted() {
        let err = client()
            .parse_empty(response(400, r#"{"code":400,"error":"Invalid version"}"#))
            .unwrap_err();
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid version");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_keeps_raw_body() {
        let err = client().parse_empty(response(502, "bad gateway")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 502, ref message } if message == "bad gateway"));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let err = client().parse_json::<ProjectDetails>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_empty_accepts_no_content() {
        let parsed = client().parse_empty(response(204, "")).unwrap();
        assert_eq!(parsed.status, 204);
    }
}
