#![allow(dead_code)]

use std::net::SocketAddr;

use bookmarks_api::{CorsOptions, Server, ServerConfig, ServerError};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::client::conn::http1;
use hyper::{HeaderMap, Request, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), ServerError>>,
}

pub fn loopback_config(options: CorsOptions) -> ServerConfig {
    ServerConfig {
        listen: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors: options,
        ..ServerConfig::default()
    }
}

pub async fn spawn(options: CorsOptions) -> TestServer {
    let server = Server::bind(&loopback_config(options))
        .await
        .expect("loopback bind should succeed");
    let addr = server.local_addr().expect("bound address");
    let (shutdown, signal) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.run_until(async move {
        let _ = signal.await;
    }));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

impl TestServer {
    pub async fn send(&self, request: Request<Empty<Bytes>>) -> TestResponse {
        let stream = TcpStream::connect(self.addr)
            .await
            .expect("connect to test server");
        let (mut sender, connection) = http1::handshake(TokioIo::new(stream))
            .await
            .expect("http/1.1 handshake");
        tokio::spawn(async move {
            let _ = connection.await;
        });

        let response = sender
            .send_request(request)
            .await
            .expect("response from test server");
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.expect("response body").to_bytes();

        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
        }
    }

    pub async fn stop(self) -> Result<(), ServerError> {
        let _ = self.shutdown.send(());
        self.handle.await.expect("server task should not panic")
    }
}

pub fn get(path: &str, origin: Option<&str>) -> Request<Empty<Bytes>> {
    with_method("GET", path, origin)
}

pub fn with_method(method: &str, path: &str, origin: Option<&str>) -> Request<Empty<Bytes>> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(origin) = origin {
        builder = builder.header("Origin", origin);
    }
    builder.body(Empty::new()).expect("valid request")
}
