//! Synchronous client SDK for the Discovery v2 document search API.
//!
//! # Overview
//! `DiscoveryClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern).
//! `DiscoveryService` pairs it with an `Authenticator` and an injected
//! `Transport` and exposes one blocking method per API operation.
//!
//! # Design
//! - Every operation is an `Endpoint` descriptor (name, verb, path template)
//!   interpreted by one generic request builder.
//! - The client is immutable; extra headers are attached per request with
//!   `HttpRequest::with_header`.
//! - Every failure, from a missing argument to a dropped connection, is an
//!   `ApiError`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod auth;
pub(crate) mod builder;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;
pub mod multipart;
pub mod service;
pub mod transport;

pub use auth::{Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuth};
pub use builder::{ANALYTICS_HEADER, FORCE_HEADER, SDK_USER_AGENT};
pub use client::DiscoveryClient;
pub use config::{ClientConfig, ResolvedConfig};
pub use error::ApiError;
pub use http::{DetailedResponse, HttpBody, HttpMethod, HttpRequest, HttpResponse};
pub use multipart::{FileUpload, FormPart, MultipartForm};
pub use service::DiscoveryService;
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
