//! reqwest-backed transport.

use async_trait::async_trait;
use tracing::debug;

use super::{ProbeRequest, RawResponse, Transport, TransportError};
use crate::utils::HttpClient;

/// Sends probes over the network with a shared [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build a transport whose client announces `user_agent`.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, TransportError> {
        Ok(Self::new(HttpClient::with_user_agent(user_agent)?))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &ProbeRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .client()
            .get(&request.url)
            .query(&request.params)
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        debug!(url = %response.url(), status, "response received");

        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
