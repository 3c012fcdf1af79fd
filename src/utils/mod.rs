//! Utility modules supporting the probe.
//!
//! - [`HttpClient`]: shared reqwest client carrying the probe user agent
//! - [`encode_query`]: percent-encode a query string the way a URL path segment would be
//!
//! # HTTP Client
//!
//! ```rust,no_run
//! use doaj_probe::utils::HttpClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new()?;
//! let response = client
//!     .client()
//!     .get("https://doaj.org/api/search/articles/ancient%20rome")
//!     .send()
//!     .await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

mod http;

pub use http::{HttpClient, DEFAULT_USER_AGENT};

/// Percent-encode `query` for contexts that build URLs by hand.
///
/// The probe itself lets reqwest encode query parameters; this is only
/// reported so the encoded form can be compared with hand-built URLs.
pub fn encode_query(query: &str) -> String {
    urlencoding::encode(query).into_owned()
}
