//! DOAJ (Directory of Open Access Journals) endpoint candidates.
//!
//! DOAJ has moved its search API between several paths over the years and
//! older paths are not reliably retired. These are the variants worth
//! probing; only the v2 path takes the query under `query`, the rest use
//! `q`. DOAJ is free and requires no API key for basic search.

use crate::models::EndpointConfig;

pub const DOAJ_BASE: &str = "https://doaj.org";

/// Query text probed when nothing else is configured.
pub const DEFAULT_QUERY: &str = "ancient rome";

/// Page size requested from every endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// A candidate path and the parameter name it expects the query under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub path: &'static str,
    pub param_key: &'static str,
    pub description: &'static str,
}

impl Candidate {
    pub fn url(&self) -> String {
        format!("{}{}", DOAJ_BASE, self.path)
    }

    pub fn endpoint(&self, query: &str, page_size: u32) -> EndpointConfig {
        EndpointConfig::search(self.url(), self.param_key, query, page_size, self.description)
    }
}

/// Probe order matters: the summary lists working endpoints in this order.
pub const CANDIDATES: [Candidate; 6] = [
    Candidate {
        path: "/api/search/articles",
        param_key: "q",
        description: "DOAJ Base API - /api/search/articles",
    },
    Candidate {
        path: "/api/v1/search/articles",
        param_key: "q",
        description: "DOAJ v1 API - /api/v1/search/articles",
    },
    Candidate {
        path: "/api/v2/search/articles",
        param_key: "query",
        description: "DOAJ v2 API - /api/v2/search/articles",
    },
    Candidate {
        path: "/api/v3/search/articles",
        param_key: "q",
        description: "DOAJ v3 API - /api/v3/search/articles",
    },
    Candidate {
        path: "/api/articles",
        param_key: "q",
        description: "DOAJ Articles - /api/articles",
    },
    Candidate {
        path: "/api/search",
        param_key: "q",
        description: "DOAJ Search - /api/search",
    },
];

/// All candidates as endpoint configurations for `query`.
pub fn candidate_endpoints(query: &str, page_size: u32) -> Vec<EndpointConfig> {
    CANDIDATES
        .iter()
        .map(|candidate| candidate.endpoint(query, page_size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParamValue;

    #[test]
    fn test_candidate_urls() {
        let urls: Vec<String> = CANDIDATES.iter().map(Candidate::url).collect();
        assert_eq!(
            urls,
            vec![
                "https://doaj.org/api/search/articles",
                "https://doaj.org/api/v1/search/articles",
                "https://doaj.org/api/v2/search/articles",
                "https://doaj.org/api/v3/search/articles",
                "https://doaj.org/api/articles",
                "https://doaj.org/api/search",
            ]
        );
    }

    #[test]
    fn test_only_v2_uses_query_key() {
        for endpoint in candidate_endpoints(DEFAULT_QUERY, DEFAULT_PAGE_SIZE) {
            let key = if endpoint.url.ends_with("/api/v2/search/articles") {
                "query"
            } else {
                "q"
            };
            assert_eq!(
                endpoint.params.get(key),
                Some(&ParamValue::Text("ancient rome".to_string())),
                "{}",
                endpoint.url
            );
            assert_eq!(endpoint.params.get("pageSize"), Some(&ParamValue::Int(5)));
            assert_eq!(endpoint.params.to_pairs().len(), 2);
        }
    }
}
