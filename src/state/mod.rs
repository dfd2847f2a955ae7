use crate::data::{DataFacade, FeedStore, LatencyProfile, MockAdapter};
use crate::infra::app_config::AppConfig;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct AppState {
    pub facade: Arc<DataFacade>,
    pub config: Arc<RwLock<AppConfig>>,
}

impl AppState {
    /// Wire the seeded mock backend for the signed-in user the demo data
    /// assumes.
    pub fn new(config: AppConfig) -> Self {
        let store = Arc::new(FeedStore::seeded());
        let actor = store.profile().me;
        let latency = if config.simulate_latency {
            LatencyProfile::realistic()
        } else {
            LatencyProfile::none()
        };
        let adapter = Arc::new(MockAdapter::with_latency(store, actor, latency));
        Self {
            facade: Arc::new(DataFacade::new(adapter)),
            config: Arc::new(RwLock::new(config)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
