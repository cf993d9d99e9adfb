use liquid_catalog::frontend::start_all;
use liquid_catalog::logging;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    info!("Liquid catalog is starting...");
    start_all().await
}
