//! Probe results.

use serde_json::Value;

use crate::models::EndpointConfig;
use crate::transport::TransportError;

/// Why a probe did not count as working.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Connection, DNS, timeout or body read failure
    #[error("Request error: {0}")]
    Transport(#[from] TransportError),

    /// Any status other than 200
    #[error("HTTP {status}")]
    Http { status: u16, body_preview: String },

    /// Status 200 with a body that is not JSON
    #[error("Invalid JSON response: {message}")]
    Decode {
        message: String,
        body_preview: String,
    },
}

/// Result of probing one endpoint. The decoded body exists only on success.
#[derive(Debug)]
pub enum ProbeOutcome {
    Success(Value),
    Failure(ProbeError),
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            ProbeOutcome::Success(data) => Some(data),
            ProbeOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ProbeError> {
        match self {
            ProbeOutcome::Success(_) => None,
            ProbeOutcome::Failure(err) => Some(err),
        }
    }

    pub fn into_data(self) -> Option<Value> {
        match self {
            ProbeOutcome::Success(data) => Some(data),
            ProbeOutcome::Failure(_) => None,
        }
    }
}

/// An endpoint that answered 200 with decodable JSON.
#[derive(Debug, Clone)]
pub struct WorkingEndpoint {
    pub config: EndpointConfig,
    pub data: Value,
}
