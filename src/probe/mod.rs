//! Endpoint probing.
//!
//! [`Prober::probe`] issues exactly one GET per endpoint and classifies
//! what came back. An endpoint counts as working when it answers 200 with
//! a body that decodes as JSON, whatever that JSON contains. [`run`] walks
//! the configured endpoints one after another and finishes with the
//! summary from [`summary`].

pub mod summary;

pub use summary::{print_summary, NO_ENDPOINT_HINTS};

use serde_json::Value;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::models::{
    object_keys, EndpointConfig, ProbeError, ProbeOutcome, ResponseShape, WorkingEndpoint,
};
use crate::transport::{ProbeRequest, Transport};
use crate::ui::{escape_non_ascii, format_key_list, preview, Console, Status};
use crate::utils::encode_query;

/// Characters of a failed response body shown in the report.
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Characters of pretty-printed JSON shown for a working endpoint.
pub const JSON_PREVIEW_CHARS: usize = 500;

/// Probes single endpoints through a [`Transport`].
#[derive(Debug, Clone)]
pub struct Prober {
    transport: Arc<dyn Transport>,
    user_agent: String,
    timeout: Duration,
}

impl Prober {
    pub fn new(
        transport: Arc<dyn Transport>,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn from_settings(transport: Arc<dyn Transport>, settings: &Settings) -> Self {
        Self::new(transport, settings.user_agent.clone(), settings.timeout())
    }

    /// The request sent for `endpoint`.
    pub fn request_for(&self, endpoint: &EndpointConfig) -> ProbeRequest {
        ProbeRequest {
            url: endpoint.url.clone(),
            params: endpoint.params.to_pairs(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("User-Agent".to_string(), self.user_agent.clone()),
            ],
            timeout: self.timeout,
        }
    }

    /// Probe one endpoint, reporting to `console` as it goes.
    ///
    /// Probe failures are part of the outcome; the only error returned is a
    /// failure to write the report itself.
    pub async fn probe<W: Write>(
        &self,
        endpoint: &EndpointConfig,
        console: &mut Console<W>,
    ) -> io::Result<ProbeOutcome> {
        console.blank()?;
        console.status(Status::Search, format!("Testing: {}", endpoint.description))?;
        console.field("URL", &endpoint.url)?;
        console.field("Params", &endpoint.params)?;

        let outcome = self.exchange(endpoint, console).await?;
        info!(
            url = %endpoint.url,
            success = outcome.is_success(),
            error = %outcome.error().map(|e| e.to_string()).unwrap_or_default(),
            "probe finished"
        );
        Ok(outcome)
    }

    async fn exchange<W: Write>(
        &self,
        endpoint: &EndpointConfig,
        console: &mut Console<W>,
    ) -> io::Result<ProbeOutcome> {
        let request = self.request_for(endpoint);
        debug!(url = %request.url, params = %endpoint.params, "sending probe");

        let response = match self.transport.get(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %request.url, error = %err, "probe request failed");
                console.status(Status::Error, format!("FAILED - Request error: {}", err))?;
                return Ok(ProbeOutcome::Failure(ProbeError::Transport(err)));
            }
        };

        console.field("Status Code", response.status)?;

        if response.status != 200 {
            console.status(Status::Error, format!("FAILED - HTTP {}", response.status))?;
            let body_preview = preview(&response.body, BODY_PREVIEW_CHARS);
            console.field("Response", &body_preview)?;
            return Ok(ProbeOutcome::Failure(ProbeError::Http {
                status: response.status,
                body_preview,
            }));
        }

        let data: Value = match serde_json::from_str(&response.body) {
            Ok(data) => data,
            Err(err) => {
                debug!(url = %request.url, error = %err, "body is not JSON");
                console.status(Status::Error, "FAILED - Invalid JSON response")?;
                let body_preview = preview(&response.body, BODY_PREVIEW_CHARS);
                console.field("Response text", &body_preview)?;
                return Ok(ProbeOutcome::Failure(ProbeError::Decode {
                    message: err.to_string(),
                    body_preview,
                }));
            }
        };

        console.status(Status::Success, "SUCCESS - JSON Response received")?;
        report_shape(&data, console)?;

        let pretty = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
        let pretty = escape_non_ascii(&pretty);
        console.line("Response preview:")?;
        console.line(preview(&pretty, JSON_PREVIEW_CHARS))?;

        Ok(ProbeOutcome::Success(data))
    }
}

fn report_shape<W: Write>(data: &Value, console: &mut Console<W>) -> io::Result<()> {
    if data.is_object() {
        console.field("Response keys", format_key_list(&object_keys(data)))?;
    }

    match ResponseShape::sniff(data) {
        ResponseShape::Results {
            count,
            first_keys,
            first_title,
        } => {
            console.line(format!("Found {} results in 'results' key", count))?;
            if let Some(keys) = first_keys {
                console.field("First result keys", format_key_list(&keys))?;
            }
            if let Some(title) = first_title {
                console.field("First result title", title)?;
            }
        }
        ResponseShape::Response { keys, docs } => {
            console.field("Response data keys", format_key_list(&keys))?;
            if let Some(docs) = docs {
                console.line(format!("Found {} docs in response", docs.count))?;
                if let Some(keys) = docs.first_keys {
                    console.field("First doc keys", format_key_list(&keys))?;
                }
            }
        }
        ResponseShape::Unknown => debug!("response matches no known layout"),
    }

    Ok(())
}

/// What a run found.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub attempted: usize,
    pub working: Vec<WorkingEndpoint>,
}

/// Probe every configured endpoint in order and print the summary.
///
/// Endpoint failures never abort the run; the returned error only covers
/// writing the report.
pub async fn run<W: Write>(
    transport: Arc<dyn Transport>,
    settings: &Settings,
    console: &mut Console<W>,
) -> io::Result<RunReport> {
    console.status(Status::Search, "DOAJ API Endpoint Testing")?;
    console.rule()?;

    debug!(
        query = %settings.query,
        encoded = %encode_query(&settings.query),
        "query prepared"
    );

    let prober = Prober::from_settings(transport, settings);
    let endpoints = settings.endpoint_configs();
    let mut working = Vec::new();

    for endpoint in &endpoints {
        let outcome = prober.probe(endpoint, console).await?;
        if let Some(data) = outcome.into_data() {
            working.push(WorkingEndpoint {
                config: endpoint.clone(),
                data,
            });
        }
    }

    info!(
        attempted = endpoints.len(),
        working = working.len(),
        "all endpoints probed"
    );

    print_summary(&working, console)?;
    console.flush()?;

    Ok(RunReport {
        attempted: endpoints.len(),
        working,
    })
}
