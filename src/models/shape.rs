//! Shape-sniffing for the two response layouts DOAJ has used.
//!
//! Newer API versions answer with `{"results": [{"bibjson": {...}}, ...]}`,
//! the older Solr-style endpoints with `{"response": {"docs": [...]}}`.
//! Nothing here validates a schema; it only looks at the keys that matter
//! for reporting.

use serde_json::{Map, Value};

/// Placeholder used when a record carries no title.
pub const NO_TITLE: &str = "No title";

/// What shape-sniffing found in a decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    /// Top-level `results` key.
    Results {
        count: usize,
        first_keys: Option<Vec<String>>,
        /// Set only when the first result has a `bibjson` member
        first_title: Option<String>,
    },
    /// Top-level `response` key.
    Response {
        keys: Vec<String>,
        docs: Option<DocsShape>,
    },
    Unknown,
}

/// The `docs` array inside a `response` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsShape {
    pub count: usize,
    pub first_keys: Option<Vec<String>>,
}

impl ResponseShape {
    pub fn sniff(data: &Value) -> Self {
        let Some(root) = data.as_object() else {
            return ResponseShape::Unknown;
        };

        if let Some(results) = root.get("results") {
            let items = as_items(results);
            let first = items.first();
            return ResponseShape::Results {
                count: items.len(),
                first_keys: first.map(object_keys),
                first_title: first.and_then(bibjson_title),
            };
        }

        if let Some(response) = root.get("response") {
            let docs = response.get("docs").map(|docs| {
                let items = as_items(docs);
                DocsShape {
                    count: items.len(),
                    first_keys: items.first().map(object_keys),
                }
            });
            return ResponseShape::Response {
                keys: object_keys(response),
                docs,
            };
        }

        ResponseShape::Unknown
    }
}

/// Result count and sample title shown for a working endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSummary {
    pub count: usize,
    pub title: Option<String>,
}

impl SampleSummary {
    /// A non-empty `results` array wins; otherwise `response.docs` is used.
    pub fn from_data(data: &Value) -> Option<Self> {
        let results = data.get("results").map(as_items).unwrap_or_default();
        if !results.is_empty() {
            return Some(Self {
                count: results.len(),
                title: results.first().and_then(bibjson_title),
            });
        }

        let docs = data.get("response")?.get("docs")?;
        let docs = as_items(docs);
        Some(Self {
            count: docs.len(),
            title: docs.first().map(|doc| title_or_placeholder(doc.as_object())),
        })
    }
}

/// Keys of a JSON object in document order; empty for anything else.
pub fn object_keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

/// Render a JSON value for display: strings bare, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_items(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or_default()
}

fn bibjson_title(record: &Value) -> Option<String> {
    let bibjson = record.as_object()?.get("bibjson")?;
    Some(title_or_placeholder(bibjson.as_object()))
}

fn title_or_placeholder(record: Option<&Map<String, Value>>) -> String {
    record
        .and_then(|map| map.get("title"))
        .map(display_value)
        .unwrap_or_else(|| NO_TITLE.to_string())
}
