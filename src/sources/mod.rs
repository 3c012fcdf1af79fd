//! Catalogs of endpoints to probe.
//!
//! Each catalog knows the candidate URLs of one service and the parameter
//! names they expect. Only DOAJ is probed today.

pub mod doaj;

pub use doaj::{candidate_endpoints, Candidate, CANDIDATES, DEFAULT_PAGE_SIZE, DEFAULT_QUERY};
