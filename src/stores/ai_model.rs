use parking_lot::RwLock;
use serde_json::Value;

use crate::api::AiModelApi;
use crate::types::{ModelAction, Result};

const STATUS_RUNNING: &str = "RUNNING";
const STATUS_STOPPED: &str = "STOPPED";

/// AI-model control panel state: two opaque snapshots (status, info)
/// overwritten wholesale on each fetch, with running/stopped views derived
/// from the status snapshot's `status` field.
pub struct AiModelStore {
    api: AiModelApi,
    state: RwLock<AiModelState>,
}

#[derive(Debug, Default)]
struct AiModelState {
    status: Option<Value>,
    info: Option<Value>,
    loading: bool,
    error: Option<String>,
}

impl AiModelStore {
    pub fn new(api: AiModelApi) -> Self {
        Self {
            api,
            state: RwLock::new(AiModelState::default()),
        }
    }

    // ----- actions -----

    pub async fn fetch_status(&self) -> Result<Value> {
        self.begin();
        let result = self.api.get_status().await;
        if let Ok(status) = &result {
            self.state.write().status = Some(status.clone());
        }
        self.complete(result)
    }

    pub async fn fetch_info(&self) -> Result<Value> {
        self.begin();
        let result = self.api.get_info().await;
        if let Ok(info) = &result {
            self.state.write().info = Some(info.clone());
        }
        self.complete(result)
    }

    /// Issue a control call, then re-fetch status sequentially so callers
    /// observe refreshed `is_running`/`is_stopped` views. The control call's
    /// outcome is what gets reported; a failed re-fetch only logs.
    pub async fn control_model(&self, action: ModelAction) -> Result<Value> {
        self.begin();
        let result = self.api.control(action).await;
        if result.is_ok() {
            match self.api.get_status().await {
                Ok(status) => self.state.write().status = Some(status),
                Err(e) => {
                    tracing::warn!(%action, error = %e, "status refresh after control failed")
                }
            }
        }
        self.complete(result)
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    // ----- derived views -----

    pub fn status(&self) -> Option<Value> {
        self.state.read().status.clone()
    }

    pub fn info(&self) -> Option<Value> {
        self.state.read().info.clone()
    }

    pub fn is_running(&self) -> bool {
        self.status_field() == Some(STATUS_RUNNING.to_string())
    }

    pub fn is_stopped(&self) -> bool {
        self.status_field() == Some(STATUS_STOPPED.to_string())
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    fn status_field(&self) -> Option<String> {
        self.state
            .read()
            .status
            .as_ref()
            .and_then(|s| s.get("status"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    // ----- uniform action plumbing -----

    fn begin(&self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
    }

    fn complete<T>(&self, result: Result<T>) -> Result<T> {
        let mut state = self.state.write();
        if let Err(e) = &result {
            state.error = Some(e.to_string());
        }
        state.loading = false;
        result
    }
}
