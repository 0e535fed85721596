use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::AllowList;
use crate::result::CorsDecision;

/// CORS policy engine evaluating requests against a fixed [`CorsOptions`].
///
/// Built once at start-up and shared read-only between connections.
#[derive(Debug)]
pub struct Cors {
    allow_list: AllowList,
    methods_value: Option<String>,
    allowed_headers_value: Option<String>,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self {
            methods_value: options.methods.header_value(),
            allowed_headers_value: options.allowed_headers.header_value(),
            allow_list: options.allow_list,
        })
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allow_list.is_allowed(origin)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let origin = request.origin_or_empty();
        let allowed = self.is_origin_allowed(origin);

        let mut headers = HeaderCollection::new();
        if allowed {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.add_vary(header::ORIGIN);
        }
        self.push_policy_headers(&mut headers);

        let headers = headers.into_headers();
        if allowed {
            CorsDecision::Allowed { headers }
        } else {
            CorsDecision::Rejected { headers }
        }
    }

    fn push_policy_headers(&self, headers: &mut HeaderCollection) {
        if let Some(methods) = &self.methods_value {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, methods.as_str());
        }
        if let Some(allowed) = &self.allowed_headers_value {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed.as_str());
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
