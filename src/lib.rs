//! # DOAJ Probe
//!
//! Probes the candidate URLs of the DOAJ search API to find out which
//! endpoint variants currently answer, and prints a short report of what
//! each working one returned.
//!
//! ## Architecture
//!
//! - [`models`]: Endpoint descriptions, probe outcomes and shape-sniffing
//! - [`sources`]: Catalog of candidate DOAJ endpoints
//! - [`transport`]: The HTTP round trip behind a trait, with a reqwest and a mock implementation
//! - [`probe`]: Probing of single endpoints and the sequential run with its summary
//! - [`ui`]: Console report formatting
//! - [`utils`]: HTTP client and encoding helpers
//! - [`config`]: Settings and settings files

pub mod config;
pub mod models;
pub mod probe;
pub mod sources;
pub mod transport;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use models::{EndpointConfig, ProbeOutcome, WorkingEndpoint};
pub use probe::{run, Prober, RunReport};
pub use transport::{HttpTransport, MockTransport, Transport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
