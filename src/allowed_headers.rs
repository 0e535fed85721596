use crate::constants::header;
use indexmap::IndexMap;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedHeaders {
    // Keyed by lowercase name so `content-type` and `Content-Type` collapse.
    entries: IndexMap<String, String>,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([header::CONTENT_TYPE])
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = IndexMap::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            entries
                .entry(trimmed.to_ascii_lowercase())
                .or_insert(trimmed);
        }

        Self { entries }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn header_value(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        Some(self.values().collect::<Vec<_>>().join(", "))
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
