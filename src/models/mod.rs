//! Core data models for endpoints and probe results.

mod endpoint;
mod outcome;
mod shape;

pub use endpoint::{EndpointConfig, ParamValue, QueryParams};
pub use outcome::{ProbeError, ProbeOutcome, WorkingEndpoint};
pub use shape::{object_keys, DocsShape, ResponseShape, SampleSummary, NO_TITLE};
