//! Error types for the Discovery client.
//!
//! # Design
//! `MissingArgument` is raised while building a request, before any I/O.
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from other failures. All other non-2xx
//! responses land in `Http` with the status code and the service's error
//! message. Transports report network failures as `Transport`, so callers
//! see exactly one error type whatever layer failed.

use thiserror::Error;

/// Errors returned by `DiscoveryClient` and `DiscoveryService`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter was empty when the request was built.
    #[error("{operation}: argument `{parameter}` is required")]
    MissingArgument {
        operation: &'static str,
        parameter: &'static str,
    },

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (connection, TLS, proxy, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status carried by this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_names_operation_and_parameter() {
        let err = ApiError::MissingArgument {
            operation: "DeleteProject",
            parameter: "project_id",
        };
        assert_eq!(err.to_string(), "DeleteProject: argument `project_id` is required");
    }

    #[test]
    fn status_is_exposed_for_server_errors_only() {
        assert_eq!(ApiError::NotFound.status(), Some(404));
        let err = ApiError::Http {
            status: 409,
            message: "conflict".to_string(),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "HTTP 409: conflict");
        assert_eq!(ApiError::Transport("refused".to_string()).status(), None);
    }
}
