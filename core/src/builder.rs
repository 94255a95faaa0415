//! Generic interpreter for `Endpoint` descriptors.
//!
//! `RequestBuilder` owns every convention shared by all operations: path
//! parameter validation and percent-encoding, the mandatory `version`
//! argument, the standard headers, and body attachment. Per-operation code in
//! `client` only adds optional query arguments and the body.

use std::fmt::Display;

use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpBody, HttpRequest};
use crate::multipart::MultipartForm;

pub const SDK_USER_AGENT: &str = concat!("discovery-rust-sdk/", env!("CARGO_PKG_VERSION"));
pub const ANALYTICS_HEADER: &str = "X-Discovery-SDK-Analytics";
pub const FORCE_HEADER: &str = "X-Watson-Discovery-Force";

pub(crate) struct RequestBuilder {
    operation: &'static str,
    request: HttpRequest,
}

impl RequestBuilder {
    /// Start a request for `endpoint`, substituting `path_params` into the
    /// template in order. Empty or missing path parameters fail fast.
    pub(crate) fn new(
        service_url: &str,
        version: &str,
        endpoint: &Endpoint,
        path_params: &[&str],
    ) -> Result<Self, ApiError> {
        let names = endpoint.path_params();
        let mut path = endpoint.path.to_string();
        for (index, &name) in names.iter().enumerate() {
            let value = path_params.get(index).copied().unwrap_or_default();
            require(endpoint.operation, name, value)?;
            path = path.replacen(&format!("{{{name}}}"), &urlencoding::encode(value), 1);
        }

        Ok(Self {
            operation: endpoint.operation,
            request: HttpRequest {
                operation: endpoint.operation,
                method: endpoint.method,
                path: format!("{service_url}{path}"),
                query: vec![("version".to_string(), version.to_string())],
                headers: vec![
                    ("Accept".to_string(), "application/json".to_string()),
                    ("User-Agent".to_string(), SDK_USER_AGENT.to_string()),
                    (
                        ANALYTICS_HEADER.to_string(),
                        format!(
                            "service_name=discovery;service_version=V2;operation_id={}",
                            endpoint.operation
                        ),
                    ),
                ],
                body: None,
            },
        })
    }

    /// Required query argument; empty values fail fast.
    pub(crate) fn query_required(mut self, name: &'static str, value: &str) -> Result<Self, ApiError> {
        require(self.operation, name, value)?;
        self.request.query.push((name.to_string(), value.to_string()));
        Ok(self)
    }

    /// Optional query argument, attached only when present.
    pub(crate) fn query_opt<V: Display>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.request.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// List argument sent as one comma-separated value, skipped when empty.
    pub(crate) fn query_list<S: AsRef<str>>(mut self, name: &str, values: &[S]) -> Self {
        if !values.is_empty() {
            let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
            self.request.query.push((name.to_string(), joined));
        }
        self
    }

    /// Boolean-valued header, attached only when explicitly set.
    pub(crate) fn header_opt(mut self, name: &str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.request.headers.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub(crate) fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.request.body = Some(HttpBody::Json(json));
        Ok(self)
    }

    pub(crate) fn multipart(mut self, form: MultipartForm) -> Self {
        self.request.body = Some(HttpBody::Multipart(form));
        self
    }

    pub(crate) fn build(self) -> HttpRequest {
        self.request
    }
}

/// Fail with `MissingArgument` when `value` is empty or whitespace.
pub(crate) fn require(operation: &'static str, parameter: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingArgument { operation, parameter });
    }
    Ok(())
}

/// Fail with `MissingArgument` when a required list is empty.
pub(crate) fn require_list<T>(
    operation: &'static str,
    parameter: &'static str,
    values: &[T],
) -> Result<(), ApiError> {
    if values.is_empty() {
        return Err(ApiError::MissingArgument { operation, parameter });
    }
    Ok(())
}

/// Serialize a JSON part for a multipart form.
pub(crate) fn to_json_part<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}
