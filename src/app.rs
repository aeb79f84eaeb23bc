//! Application wiring: config -> session -> transport -> APIs -> stores.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::api::{AiModelApi, AuthApi, BeachApi, ChatbotApi, DetectionApi, UserApi};
use crate::http::{HttpClient, HttpError};
use crate::session::{MemorySessionStore, SessionContext, SessionEvent, SessionStore};
use crate::stores::{AiModelStore, AuthStore, BeachStore, ChatbotStore, DetectionStore};
use crate::utils::ClientConfig;

/// The assembled client: one session context, one HTTP client, and the five
/// stores that own the application state. Data flows UI action -> store
/// action -> API module -> HTTP wrapper -> backend.
pub struct App {
    session: Arc<SessionContext>,
    pub auth: AuthStore,
    pub beaches: BeachStore,
    pub chatbot: ChatbotStore,
    pub ai_model: AiModelStore,
    pub detections: DetectionStore,
    pub users: UserApi,
}

impl App {
    /// Build against an in-memory session store.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Self::with_session_store(config, Box::new(MemorySessionStore::default()))
    }

    /// Build with a caller-supplied session store (e.g. [`crate::session::FileSessionStore`]
    /// for a session that survives restarts).
    pub fn with_session_store(
        config: &ClientConfig,
        store: Box<dyn SessionStore>,
    ) -> Result<Self, HttpError> {
        let session = Arc::new(SessionContext::new(store));
        let http = HttpClient::new(config, session.clone())?;

        Ok(Self {
            auth: AuthStore::new(AuthApi::new(http.clone()), session.clone()),
            beaches: BeachStore::new(BeachApi::new(http.clone())),
            chatbot: ChatbotStore::new(ChatbotApi::new(http.clone())),
            ai_model: AiModelStore::new(AiModelApi::new(http.clone())),
            detections: DetectionStore::new(DetectionApi::new(http.clone())),
            users: UserApi::new(http),
            session,
        })
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Subscribe to out-of-band session events. The shell reacts to
    /// [`SessionEvent::Unauthorized`] by navigating to the login view; the
    /// transport layer itself carries no navigation concern.
    pub fn subscribe_session_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.session.subscribe()
    }
}
