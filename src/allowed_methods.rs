use crate::constants::method;
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    ///
    /// Case-insensitive duplicates keep the first spelling.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped = Vec::new();
        for value in values {
            let value = value.into().trim().to_string();
            if seen.insert(value.to_ascii_uppercase()) {
                deduped.push(value);
            }
        }

        Self(deduped)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(", "))
        }
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::POST,
            method::PUT,
            method::DELETE,
            method::OPTIONS,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
