use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::roadmap::RoadmapRequester;
use crate::wizard::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single active wizard session. Never held across an await on the requester.
    pub session: Arc<Mutex<Session>>,
    /// Pluggable roadmap backend. Default: GeminiRoadmapRequester.
    pub requester: Arc<dyn RoadmapRequester>,
    pub config: Config,
}

impl AppState {
    pub fn new(requester: Arc<dyn RoadmapRequester>, config: Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            requester,
            config,
        }
    }
}
