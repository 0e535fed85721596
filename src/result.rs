use crate::headers::Headers;

/// Outcome of evaluating one request against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Origin approved; headers carry the reflected origin and `Vary: Origin`.
    Allowed { headers: Headers },
    /// Origin missing or not approved; headers carry only the fixed method and header policy.
    Rejected { headers: Headers },
}

impl CorsDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CorsDecision::Allowed { .. })
    }

    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Allowed { headers } | CorsDecision::Rejected { headers } => headers,
        }
    }

    pub fn into_headers(self) -> Headers {
        match self {
            CorsDecision::Allowed { headers } | CorsDecision::Rejected { headers } => headers,
        }
    }
}
