use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::origin::{AllowList, OriginMatcher};
use crate::util::is_http_token;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct CorsOptions {
    pub allow_list: AllowList,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allow_list: AllowList::bookmarks_web(),
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
        }
    }
}

/// Errors produced when [`CorsOptions`] cannot describe a usable policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one allowed method must be configured")]
    EmptyMethods,
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("allowed header `{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("allowed origin `{0}` can never match a browser Origin header")]
    InvalidOrigin(String),
    #[error("preview suffix `{0}` must start with '.' and name a domain")]
    InvalidPreviewSuffix(String),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.methods.is_empty() {
            return Err(ValidationError::EmptyMethods);
        }

        if let Some(method) = self.methods.iter().find(|method| !is_http_token(method)) {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let Some(name) = self
            .allowed_headers
            .values()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        for matcher in self.allow_list.matchers() {
            match matcher {
                OriginMatcher::Exact(origin) if origin.is_empty() || origin.ends_with('/') => {
                    return Err(ValidationError::InvalidOrigin(origin.clone()));
                }
                OriginMatcher::PreviewSuffix(suffix)
                    if suffix.len() < 2 || !suffix.starts_with('.') || suffix.contains('/') =>
                {
                    return Err(ValidationError::InvalidPreviewSuffix(suffix.clone()));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
