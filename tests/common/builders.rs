#![allow(dead_code)]

use bookmarks_api::constants::{defaults, method};
use bookmarks_api::{
    AllowList, AllowedHeaders, AllowedMethods, Cors, CorsDecision, CorsOptions, OriginMatcher,
    RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    origins: Option<Vec<String>>,
    preview_suffix: Option<Option<String>>,
    patterns: Vec<String>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(origins.into_iter().map(Into::into).collect());
        self
    }

    pub fn preview_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.preview_suffix = Some(Some(suffix.into()));
        self
    }

    pub fn without_preview(mut self) -> Self {
        self.preview_suffix = Some(None);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(AllowedHeaders::list(headers));
        self
    }

    pub fn options(self) -> CorsOptions {
        let CorsOptions {
            methods: default_methods,
            allowed_headers: default_allowed_headers,
            ..
        } = CorsOptions::default();

        let origins = self.origins.unwrap_or_else(|| {
            defaults::ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect()
        });
        let mut allow_list = AllowList::new(origins);
        let preview = self
            .preview_suffix
            .unwrap_or_else(|| Some(defaults::PREVIEW_SUFFIX.to_string()));
        if let Some(suffix) = preview {
            allow_list.push(OriginMatcher::preview_suffix(suffix));
        }
        for pattern in &self.patterns {
            allow_list.push(OriginMatcher::pattern_str(pattern).expect("valid origin pattern"));
        }

        CorsOptions {
            allow_list,
            methods: self.methods.unwrap_or(default_methods),
            allowed_headers: self.allowed_headers.unwrap_or(default_allowed_headers),
        }
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options()).expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            path: "/".into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
        };
        cors.check(&ctx)
    }

    pub fn into_http(self) -> hyper::Request<()> {
        let mut builder = hyper::Request::builder()
            .method(self.method.as_str())
            .uri(self.path.as_str());
        if let Some(origin) = &self.origin {
            builder = builder.header("Origin", origin.as_str());
        }
        builder.body(()).expect("valid request")
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
