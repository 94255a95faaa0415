//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `DiscoveryClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network; a `Transport` implementation performs
//! the actual I/O. This keeps request shaping deterministic and lets tests
//! inspect every request before (or instead of) sending it.
//!
//! All fields use owned types (`String`, `Vec`) so requests can be stored,
//! cloned, and compared freely.

use crate::multipart::MultipartForm;

/// HTTP method for a request. The Discovery API uses POST for updates, so
/// there is no PUT or PATCH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Request body: either serialized JSON or a multipart form whose boundary
/// is chosen by the transport at encoding time.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpBody {
    Json(String),
    Multipart(MultipartForm),
}

impl HttpBody {
    /// Returns the JSON text, if this is a JSON body.
    pub fn as_json(&self) -> Option<&str> {
        match self {
            HttpBody::Json(json) => Some(json),
            HttpBody::Multipart(_) => None,
        }
    }

    /// Returns the form, if this is a multipart body.
    pub fn as_multipart(&self) -> Option<&MultipartForm> {
        match self {
            HttpBody::Json(_) => None,
            HttpBody::Multipart(form) => Some(form),
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `DiscoveryClient::build_*` methods. `path` is the absolute URL
/// without the query string; query arguments are kept unencoded in `query`
/// and encoded by [`HttpRequest::url`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Wire name of the operation, e.g. `CreateProject`.
    pub operation: &'static str,
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<HttpBody>,
}

impl HttpRequest {
    /// Full URL including the percent-encoded query string.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// Attach an extra header to this request only.
    ///
    /// Custom headers are per call: there is no client-wide header state, so
    /// a header added here never leaks into another request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// First query argument named `name`.
    pub fn query_arg(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed
/// to `DiscoveryClient::parse_*` methods for deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Typed result of a successful call, together with the response metadata.
///
/// `result` is never absent: an empty body maps to `T::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// First response header matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn into_result(self) -> T {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest {
            operation: "ListFields",
            method: HttpMethod::Get,
            path: "https://example.com/v2/projects/p1/fields".to_string(),
            query: vec![
                ("version".to_string(), "2023-03-31".to_string()),
                ("collection_ids".to_string(), "a,b c".to_string()),
            ],
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    #[test]
    fn url_encodes_query_values() {
        assert_eq!(
            request().url(),
            "https://example.com/v2/projects/p1/fields?version=2023-03-31&collection_ids=a%2Cb%20c"
        );
    }

    #[test]
    fn url_without_query_is_bare_path() {
        let mut req = request();
        req.query.clear();
        assert_eq!(req.url(), "https://example.com/v2/projects/p1/fields");
    }

    #[test]
    fn with_header_appends_and_lookup_ignores_case() {
        let req = request().with_header("X-Custom", "1");
        assert_eq!(req.header("x-custom"), Some("1"));
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.header("missing"), None);
    }

    #[test]
    fn query_arg_lookup() {
        let req = request();
        assert_eq!(req.query_arg("version"), Some("2023-03-31"));
        assert_eq!(req.query_arg("count"), None);
    }

    #[test]
    fn body_accessors() {
        let json = HttpBody::Json("{}".to_string());
        assert_eq!(json.as_json(), Some("{}"));
        assert!(json.as_multipart().is_none());

        let form = HttpBody::Multipart(MultipartForm::default());
        assert!(form.as_json().is_none());
        assert!(form.as_multipart().is_some());
    }
}
