use std::sync::Arc;

use crate::config::EngineConfig;
use crate::services::game_flow::GameFlowService;
use crate::ws::hub::SnapshotHub;

/// Shared handles for every HTTP worker.
#[derive(Clone)]
pub struct AppState {
    pub flow: Arc<GameFlowService>,
    /// Also the flow service's snapshot publisher.
    pub hub: Arc<SnapshotHub>,
}

impl AppState {
    pub fn new(config: &EngineConfig) -> Self {
        let hub = Arc::new(SnapshotHub::new());
        let flow = Arc::new(GameFlowService::new(config, hub.clone()));
        Self { flow, hub }
    }
}
