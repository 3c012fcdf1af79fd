//! Endpoint descriptions and their query parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

impl ParamValue {
    /// The value as it goes on the wire.
    pub fn as_query_value(&self) -> String {
        match self {
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Text(s) if s.contains('\'') && !s.contains('"') => write!(f, "\"{}\"", s),
            ParamValue::Text(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
        }
    }
}

/// Insertion-ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter, replacing an existing one with the same name in place.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Name/value pairs ready for the HTTP client to encode.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(n, v)| (n.clone(), v.as_query_value()))
            .collect()
    }
}

/// Rendered like a dictionary literal: `{'q': 'ancient rome', 'pageSize': 5}`.
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// One candidate endpoint to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    pub params: QueryParams,
    /// Free text, only used for reporting
    pub description: String,
}

impl EndpointConfig {
    pub fn new(
        url: impl Into<String>,
        params: QueryParams,
        description: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            params,
            description: description.into(),
        }
    }

    /// A search endpoint taking the query under `param_key` plus a `pageSize`.
    pub fn search(
        url: impl Into<String>,
        param_key: &str,
        query: &str,
        page_size: u32,
        description: impl Into<String>,
    ) -> Self {
        let params = QueryParams::new()
            .with(param_key, query)
            .with("pageSize", page_size);
        Self::new(url, params, description)
    }
}
