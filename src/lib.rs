//! # Bytesmith - Exact-Size Dummy File Streaming
//!
//! An HTTP service that streams synthetic files of an exactly-specified
//! byte length, framed as a type-specific magic header, a zero-filled
//! middle region and an optional trailer, without ever materializing the
//! file in memory.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Value objects, the file-type profile catalog, domain errors
//! - **Application**: The byte-sink port and the streaming generation use case
//! - **Infrastructure**: Channel-backed sink bridging generations to HTTP bodies
//! - **API**: HTTP handlers and middleware
//!
//! ## Key Properties
//!
//! - Byte-exact output: every response carries exactly the requested size
//! - Backpressure-aware: one write outstanding per generation, suspension
//!   only at chunk boundaries
//! - A single shared read-only zero buffer serves all concurrent requests

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{profiles, value_objects};
