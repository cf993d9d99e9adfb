pub mod context;
pub mod http;
pub mod server_state;

use context::FrontendContext;
use std::sync::Arc;
use tracing::info;


pub async fn start_all() -> anyhow::Result<()> {
    let ctx = FrontendContext::from_config()?;

    let server_state = Arc::clone(&ctx.server_state);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            server_state.signal_shutdown();
        }
    });

    http::listener::run_http_server(ctx).await
}
