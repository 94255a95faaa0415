//! Request and response DTOs for the Discovery v2 API.
//!
//! # Design
//! Response types derive `Default` so an empty payload maps to an empty
//! value, and every field is optional: the server omits whatever does not
//! apply. Request types hold required fields as plain values and optional
//! fields as `Option`, skipped on serialization so no `null` is ever sent.
//!
//! Enumerated wire values are exposed as string constants rather than Rust
//! enums, so values the service adds later still deserialize.

pub mod batch;
pub mod classifier;
pub mod collection;
pub mod document;
pub mod enrichment;
pub mod project;
pub mod query;
pub mod training;

pub use batch::*;
pub use classifier::*;
pub use collection::*;
pub use document::*;
pub use enrichment::*;
pub use project::*;
pub use query::*;
pub use training::*;
