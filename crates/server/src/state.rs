use std::sync::Arc;
use tokio::sync::Mutex;

use showstore_core::{
    Config, ExternalCatalog, FavoritesGateway, SanitizedConfig, ShowSession,
};

use crate::api::WsBroadcaster;

/// Shared application state
///
/// The server hosts a single session. Handlers lock it for state changes
/// only and never across a catalog call.
pub struct AppState {
    config: Config,
    session: Mutex<ShowSession>,
    external_catalog: Arc<dyn ExternalCatalog>,
    ws_broadcaster: WsBroadcaster,
}

impl AppState {
    /// Open the session against `gateway`, rendering through the broadcaster.
    pub fn new(
        config: Config,
        gateway: FavoritesGateway,
        external_catalog: Arc<dyn ExternalCatalog>,
        ws_broadcaster: WsBroadcaster,
    ) -> Self {
        let session = ShowSession::open(gateway, Arc::new(ws_broadcaster.clone()));
        Self {
            config,
            session: Mutex::new(session),
            external_catalog,
            ws_broadcaster,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn session(&self) -> &Mutex<ShowSession> {
        &self.session
    }

    pub fn external_catalog(&self) -> &dyn ExternalCatalog {
        self.external_catalog.as_ref()
    }

    pub fn ws_broadcaster(&self) -> &WsBroadcaster {
        &self.ws_broadcaster
    }
}
