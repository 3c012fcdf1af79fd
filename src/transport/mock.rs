//! Mock transport for testing purposes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{ProbeRequest, RawResponse, Transport, TransportError};

/// A transport that answers from canned replies keyed by URL and records
/// every request it sees.
///
/// URLs without a configured reply fail with a connection error, which is
/// what an unreachable host looks like to the prober.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ProbeRequest>>,
}

impl MockTransport {
    /// Create a new mock transport with no replies configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GETs to `url` with `status` and `body`.
    pub fn respond(&self, url: &str, status: u16, body: &str) -> &Self {
        self.set_reply(url, Ok(RawResponse::new(status, body)))
    }

    /// Fail GETs to `url` below HTTP.
    pub fn fail(&self, url: &str, error: TransportError) -> &Self {
        self.set_reply(url, Err(error))
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ProbeRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Forget recorded requests, keeping replies.
    pub fn clear_requests(&self) {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    fn set_reply(&self, url: &str, reply: Result<RawResponse, TransportError>) -> &Self {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(url.to_string(), reply);
        self
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, request: &ProbeRequest) -> Result<RawResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        let replies = self
            .replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match replies.get(&request.url) {
            Some(reply) => reply.clone(),
            None => Err(TransportError::Connect(format!(
                "no mock reply for {}",
                request.url
            ))),
        }
    }
}
