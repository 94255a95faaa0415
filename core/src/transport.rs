//! The I/O seam between request building and response parsing.
//!
//! `DiscoveryService` hands every authenticated `HttpRequest` to a
//! `Transport` and parses whatever comes back. Non-2xx statuses are data, not
//! errors: a transport only fails when no response was received at all.

use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use std::fmt;

    use ureq::{Agent, RequestBuilder};

    use super::Transport;
    use crate::error::ApiError;
    use crate::http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
    use crate::multipart::{self, MultipartForm};

    /// Blocking transport backed by a `ureq` agent.
    ///
    /// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
    /// responses are returned as data and interpreted by the client.
    #[derive(Clone)]
    pub struct UreqTransport {
        agent: Agent,
    }

    impl fmt::Debug for UreqTransport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("UreqTransport").finish_non_exhaustive()
        }
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = Agent::config_builder().http_status_as_error(false).build().new_agent();
            Self { agent }
        }

        /// Route every request through the proxy at `url`.
        pub fn with_proxy(url: &str) -> Result<Self, ApiError> {
            let proxy = ureq::Proxy::new(url).map_err(|e| ApiError::Config(format!("invalid proxy `{url}`: {e}")))?;
            let agent = Agent::config_builder()
                .http_status_as_error(false)
                .proxy(Some(proxy))
                .build()
                .new_agent();
            Ok(Self { agent })
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            let url = request.url();
            let result = match request.method {
                HttpMethod::Get => with_headers(self.agent.get(&url), &request.headers).call(),
                HttpMethod::Delete => with_headers(self.agent.delete(&url), &request.headers).call(),
                HttpMethod::Post => {
                    let builder = with_headers(self.agent.post(&url), &request.headers);
                    match &request.body {
                        Some(HttpBody::Json(json)) => builder.send(json.as_bytes()),
                        Some(HttpBody::Multipart(form)) => {
                            let boundary = multipart::boundary();
                            builder
                                .header("Content-Type", MultipartForm::content_type(&boundary))
                                .send(&form.encode(&boundary)[..])
                        }
                        None => builder.send_empty(),
                    }
                }
            };
            let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            Ok(HttpResponse { status, headers, body })
        }
    }

}
