//! Client configuration and credential discovery.
//!
//! `ClientConfig` collects the constructor options: the API version (required),
//! the service URL, an explicit authenticator, and an optional proxy. Options
//! left unset are discovered from `DISCOVERY_*` environment variables, then
//! fall back to defaults.

use std::sync::Arc;

use tracing::debug;

use crate::auth::{Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuth};
use crate::error::ApiError;

/// Production endpoint used when no service URL is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.discovery.watson.cloud.ibm.com";

pub const ENV_URL: &str = "DISCOVERY_URL";
pub const ENV_AUTH_TYPE: &str = "DISCOVERY_AUTH_TYPE";
pub const ENV_BEARER_TOKEN: &str = "DISCOVERY_BEARER_TOKEN";
pub const ENV_USERNAME: &str = "DISCOVERY_USERNAME";
pub const ENV_PASSWORD: &str = "DISCOVERY_PASSWORD";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    version: String,
    service_url: Option<String>,
    authenticator: Option<Arc<dyn Authenticator>>,
    proxy: Option<String>,
}

/// Configuration with every option decided.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub version: String,
    pub service_url: String,
    pub authenticator: Arc<dyn Authenticator>,
    pub proxy: Option<String>,
}

impl ClientConfig {
    /// `version` is the API version date, e.g. `2023-03-31`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            service_url: None,
            authenticator: None,
            proxy: None,
        }
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Use `authenticator` instead of discovering credentials.
    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Arc::new(authenticator));
        self
    }

    /// Proxy URL handed to the default transport.
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<ResolvedConfig, ApiError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<ResolvedConfig, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.version.trim().is_empty() {
            return Err(ApiError::Config("version must be set".to_string()));
        }

        let service_url = self
            .service_url
            .clone()
            .or_else(|| non_empty(lookup(ENV_URL)))
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        let authenticator = match &self.authenticator {
            Some(authenticator) => authenticator.clone(),
            None => discover_authenticator(&lookup)?,
        };
        debug!(
            service_url = %service_url,
            auth_type = authenticator.auth_type(),
            "resolved client configuration"
        );

        Ok(ResolvedConfig {
            version: self.version.clone(),
            service_url,
            authenticator,
            proxy: self.proxy.clone(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Pick an authenticator from `DISCOVERY_*` variables. Without an explicit
/// auth type, a bearer token wins over basic credentials; nothing at all
/// means no authentication.
fn discover_authenticator<F>(lookup: &F) -> Result<Arc<dyn Authenticator>, ApiError>
where
    F: Fn(&str) -> Option<String>,
{
    let token = non_empty(lookup(ENV_BEARER_TOKEN));
    let username = non_empty(lookup(ENV_USERNAME));
    let password = non_empty(lookup(ENV_PASSWORD));

    let auth_type = non_empty(lookup(ENV_AUTH_TYPE)).map(|t| t.to_ascii_lowercase());
    match auth_type.as_deref() {
        Some("noauth") => Ok(Arc::new(NoAuth)),
        Some("bearertoken") => {
            let token = token.ok_or_else(|| ApiError::Config(format!("{ENV_BEARER_TOKEN} is not set")))?;
            Ok(Arc::new(BearerTokenAuthenticator::new(token)?))
        }
        Some("basic") => Ok(Arc::new(BasicAuthenticator::new(
            username.unwrap_or_default(),
            password.unwrap_or_default(),
        )?)),
        Some(other) => Err(ApiError::Config(format!("unsupported auth type `{other}`"))),
        None => match (token, username, password) {
            (Some(token), _, _) => Ok(Arc::new(BearerTokenAuthenticator::new(token)?)),
            (None, Some(username), Some(password)) => Ok(Arc::new(BasicAuthenticator::new(username, password)?)),
            _ => Ok(Arc::new(NoAuth)),
        },
    }
}
