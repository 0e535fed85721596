use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in the order the policy produced them.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value.into());
        }
    }

    /// Append to `Vary`, keeping entries unique (case-insensitive) and in first-seen order.
    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .into_iter()
            .chain(std::iter::once(&incoming))
            .flat_map(|line| line.split(','))
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect();

        if entries.is_empty() {
            self.headers.shift_remove(header::VARY);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries.drain(..) {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.headers
            .insert(header::VARY.to_string(), deduped.join(", "));
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
