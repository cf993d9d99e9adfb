use std::sync::Arc;

use crate::catalog::{Catalog, QueryService};
use crate::frontend::server_state::ServerState;
use crate::shared::config::CONFIG;

#[derive(Clone)]
pub struct FrontendContext {
    pub query: Arc<QueryService>,
    pub server_state: Arc<ServerState>,
    /// Serve the browser view and its assets
    pub ui_enabled: bool,
}

impl FrontendContext {
    pub fn from_config() -> anyhow::Result<Arc<Self>> {
        let catalog = Catalog::initialize()?;
        Ok(Self::new(catalog, CONFIG.ui.enabled))
    }

    pub fn new(catalog: Catalog, ui_enabled: bool) -> Arc<Self> {
        Arc::new(Self {
            query: Arc::new(QueryService::new(catalog)),
            server_state: Arc::new(ServerState::new()),
            ui_enabled,
        })
    }
}
