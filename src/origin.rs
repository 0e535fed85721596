use crate::constants::defaults;
use regex_automata::meta::{BuildError, Regex};
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;
const HTTPS_PREFIX: &str = "https://";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("compiling origin pattern took {elapsed:?}, over the {budget:?} budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A single rule in the allow-list.
#[derive(Debug, Clone)]
pub enum OriginMatcher {
    /// Byte-for-byte comparison with the request origin.
    Exact(String),
    /// Any `https://` origin ending in the suffix, used for preview builds.
    PreviewSuffix(String),
    /// Operator-supplied expression, anchored at both ends.
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn preview_suffix<S: Into<String>>(suffix: S) -> Self {
        Self::PreviewSuffix(suffix.into())
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|err| PatternError::Build {
            pattern: pattern.to_owned(),
            source: Box::new(err),
        })?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::PreviewSuffix(suffix) => {
                candidate.starts_with(HTTPS_PREFIX) && candidate.ends_with(suffix.as_str())
            }
            OriginMatcher::Pattern(regex) => {
                candidate.len() <= MAX_ORIGIN_LENGTH && regex.is_match(candidate)
            }
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

/// Ordered set of rules deciding which origins receive CORS approval.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    matchers: Vec<OriginMatcher>,
}

impl AllowList {
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self {
            matchers: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The allow-list the bookmarks front end is deployed with.
    pub fn bookmarks_web() -> Self {
        let mut list = Self::new(defaults::ALLOWED_ORIGINS);
        list.push(OriginMatcher::preview_suffix(defaults::PREVIEW_SUFFIX));
        list
    }

    pub fn push(&mut self, matcher: OriginMatcher) {
        self.matchers.push(matcher);
    }

    pub fn with(mut self, matcher: OriginMatcher) -> Self {
        self.push(matcher);
        self
    }

    pub fn matchers(&self) -> &[OriginMatcher] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// An empty origin is never allowed.
    pub fn is_allowed(&self, origin: &str) -> bool {
        if origin.is_empty() {
            return false;
        }

        self.matchers.iter().any(|matcher| matcher.matches(origin))
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
