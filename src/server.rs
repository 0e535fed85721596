use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::config::ServerConfig;
use crate::cors::Cors;
use crate::handler::GreetingService;
use crate::options::ValidationError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("failed to read the bound address: {0}")]
    LocalAddr(#[source] io::Error),
    #[error(transparent)]
    Policy(#[from] ValidationError),
}

/// A bound listener serving [`GreetingService`] on every accepted connection.
pub struct Server {
    listener: TcpListener,
    service: GreetingService,
}

impl Server {
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let cors = Arc::new(Cors::new(config.cors.clone())?);
        let listener = TcpListener::bind(config.listen)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.listen,
                source,
            })?;

        info!(
            addr = %config.listen,
            allow_list = cors.allow_list().len(),
            "listener bound"
        );

        Ok(Self {
            listener,
            service: GreetingService::new(cors),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::LocalAddr)
    }

    /// Serves until Ctrl-C or SIGTERM.
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves until `shutdown` resolves. Connections already accepted finish on their own tasks.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        let addr = self.local_addr()?;
        info!(%addr, "server started");
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!(%addr, "shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(accepted) => accepted,
                        Err(err) => {
                            warn!(error = %err, "failed to accept connection");
                            continue;
                        }
                    };

                    let service = self.service.clone();
                    let io = TokioIo::new(stream);
                    tokio::spawn(
                        async move {
                            let served = http1::Builder::new().serve_connection(io, service).await;
                            if let Err(err) = served {
                                debug!(error = %err, "connection error");
                            }
                        }
                        .instrument(info_span!("connection", %peer)),
                    );
                }
            }
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
