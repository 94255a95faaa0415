//! Credential attachment for outgoing requests.
//!
//! An `Authenticator` decorates an already-built `HttpRequest` right before
//! it is handed to the transport. Token acquisition and refresh are out of
//! scope: bearer tokens are supplied by the caller.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ApiError;
use crate::http::HttpRequest;

pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Attach credentials to `request`.
    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), ApiError>;

    /// Short name used in logs and by `DISCOVERY_AUTH_TYPE`.
    fn auth_type(&self) -> &'static str;
}

/// Sends requests without credentials (local or proxied deployments).
#[derive(Debug, Clone, Default)]
pub struct NoAuth;

impl Authenticator for NoAuth {
    fn authenticate(&self, _request: &mut HttpRequest) -> Result<(), ApiError> {
        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        "noAuth"
    }
}

/// `Authorization: Bearer <token>` with a caller-managed token.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ApiError::Config("bearer token must not be empty".to_string()));
        }
        Ok(Self { token })
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), ApiError> {
        request
            .headers
            .push(("Authorization".to_string(), format!("Bearer {}", self.token)));
        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        "bearerToken"
    }
}

/// `Authorization: Basic base64(username:password)`.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ApiError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(ApiError::Config(
                "basic authentication needs a username and a password".to_string(),
            ));
        }
        Ok(Self { username, password })
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BasicAuthenticator {
    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), ApiError> {
        let credentials = STANDARD.encode(format!("{}:{}", self.username, self.password));
        request
            .headers
            .push(("Authorization".to_string(), format!("Basic {credentials}")));
        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        "basic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn request() -> HttpRequest {
        HttpRequest {
            operation: "ListProjects",
            method: HttpMethod::Get,
            path: "https://example.com/v2/projects".to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[test]
    fn no_auth_leaves_request_untouched() {
        let mut req = request();
        NoAuth.authenticate(&mut req).unwrap();
        assert!(req.headers.is_empty());
    }

    #[test]
    fn bearer_token_header() {
        let mut req = request();
        BearerTokenAuthenticator::new("abc").unwrap().authenticate(&mut req).unwrap();
        assert_eq!(req.header("authorization"), Some("Bearer abc"));
    }

    #[test]
    fn basic_header_is_base64() {
        let mut req = request();
        BasicAuthenticator::new("user", "pass").unwrap().authenticate(&mut req).unwrap();
        assert_eq!(req.header("Authorization"), Some("Basic dXNlcjpwYXNz"));
    }

    #[test]
    fn empty_credentials_are_rejected() {
        assert!(matches!(BearerTokenAuthenticator::new(" "), Err(ApiError::Config(_))));
        assert!(matches!(BasicAuthenticator::new("user", ""), Err(ApiError::Config(_))));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let bearer = format!("{:?}", BearerTokenAuthenticator::new("secret-token").unwrap());
        assert!(!bearer.contains("secret-token"));
        let basic = format!("{:?}", BasicAuthenticator::new("user", "hunter2").unwrap());
        assert!(basic.contains("user"));
        assert!(!basic.contains("hunter2"));
    }
}
