use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tokio::time::{Instant, sleep};
use tracing::{info, warn};

use crate::frontend::context::FrontendContext;
use crate::frontend::server_state::ServerState;
use crate::shared::config::{CONFIG, ServerConfig};

use super::handler::handle_request;

const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(100);
const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, Default)]
pub struct ServeOptions {
    /// Keep HTTP/1.1 connections open between requests
    pub keep_alive: bool,
    /// Upper bound on concurrently served connections
    pub max_connections: Option<usize>,
}

impl ServeOptions {
    pub fn from_config(cfg: &ServerConfig) -> Self {
        Self {
            keep_alive: cfg.keep_alive,
            max_connections: cfg.connection_limit(),
        }
    }
}

pub async fn run_http_server(ctx: Arc<FrontendContext>) -> anyhow::Result<()> {
    let addr: SocketAddr = CONFIG.server.http_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("HTTP server running at http://{addr}/");

    serve(listener, ctx, ServeOptions::from_config(&CONFIG.server)).await
}

/// Accepts connections on `listener` until the shutdown flag is raised.
pub async fn serve(
    listener: TcpListener,
    ctx: Arc<FrontendContext>,
    options: ServeOptions,
) -> anyhow::Result<()> {
    let connection_semaphore = options
        .max_connections
        .map(|max| Arc::new(Semaphore::new(max)));

    loop {
        if ctx.server_state.is_shutting_down() {
            info!("HTTP server shutting down, not accepting new connections");
            break;
        }

        // A full connection limit must not hide the shutdown flag
        let permit = match &connection_semaphore {
            Some(semaphore) => tokio::select! {
                permit = Arc::clone(semaphore).acquire_owned() => Some(permit?),
                _ = wait_for_shutdown(&ctx.server_state) => {
                    info!("HTTP server shutting down while at connection limit");
                    break;
                }
            },
            None => None,
        };

        let accept_result = tokio::select! {
            result = listener.accept() => result,
            _ = wait_for_shutdown(&ctx.server_state) => {
                info!("HTTP server shutting down, stopping accept loop");
                break;
            }
        };

        let (stream, peer_addr) = match accept_result {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept HTTP connection: {}", e);
                continue;
            }
        };
        let io = TokioIo::new(stream);

        let conn_ctx = Arc::clone(&ctx);
        conn_ctx.server_state.connection_opened();
        let keep_alive = options.keep_alive;
        tokio::spawn(async move {
            // Released when the connection task completes
            let _permit = permit;

            let mut builder = hyper::server::conn::http1::Builder::new();
            builder.keep_alive(keep_alive);

            let service_ctx = Arc::clone(&conn_ctx);
            if let Err(err) = builder
                .serve_connection(
                    io,
                    service_fn(move |req| handle_request(req, Arc::clone(&service_ctx))),
                )
                .await
            {
                if !err.is_incomplete_message() {
                    warn!("Error serving connection from {}: {:?}", peer_addr, err);
                }
            }
            conn_ctx.server_state.connection_closed();
        });
    }

    drain(&ctx.server_state).await;
    info!("HTTP server shutdown complete");
    Ok(())
}

async fn wait_for_shutdown(state: &ServerState) {
    loop {
        sleep(SHUTDOWN_POLL_INTERVAL).await;
        if state.is_shutting_down() {
            break;
        }
    }
}

async fn drain(state: &ServerState) {
    let deadline = Instant::now() + DRAIN_TIMEOUT;
    while state.open_connections() > 0 && Instant::now() < deadline {
        sleep(Duration::from_millis(50)).await;
    }
    let remaining = state.open_connections();
    if remaining > 0 {
        warn!("HTTP server stopped with {} connection(s) still open", remaining);
    }
}
