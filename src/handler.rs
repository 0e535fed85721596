use std::convert::Infallible;
use std::future::{Ready, ready};
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, VARY};
use hyper::service::Service;
use hyper::{Request, Response};
use tracing::{debug, warn};

use crate::constants::{defaults, header};
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;

pub type GreetingBody = Full<Bytes>;

/// Hyper service answering every request with the greeting and the CORS policy headers.
#[derive(Debug, Clone)]
pub struct GreetingService {
    cors: Arc<Cors>,
}

impl GreetingService {
    pub fn new(cors: Arc<Cors>) -> Self {
        Self { cors }
    }
}

impl<B> Service<Request<B>> for GreetingService {
    type Response = Response<GreetingBody>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        ready(Ok(respond(&self.cors, &req)))
    }
}

/// Builds the response for one request. Any method and any path get the same treatment.
pub fn respond<B>(cors: &Cors, request: &Request<B>) -> Response<GreetingBody> {
    let ctx = request_context(request);
    let decision = cors.check(&ctx);

    if decision.is_allowed() {
        debug!(
            method = ctx.method,
            path = ctx.path,
            origin = ctx.origin_or_empty(),
            "serving request from allowed origin"
        );
    } else {
        warn!(
            origin = ctx.origin_or_empty(),
            "received request from non-allowed origin"
        );
    }

    let mut response = Response::new(Full::new(Bytes::from_static(
        defaults::GREETING.as_bytes(),
    )));
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    apply_headers(response.headers_mut(), decision.headers());
    response
}

fn request_context<B>(request: &Request<B>) -> RequestContext<'_> {
    RequestContext {
        method: request.method().as_str(),
        path: request.uri().path(),
        origin: request
            .headers()
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok()),
    }
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            warn!(header = %name, "dropping CORS header that is not valid on the wire");
            continue;
        };

        if header_name == VARY {
            map.append(header_name, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
