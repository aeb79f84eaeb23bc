use serde_json::Value;

use crate::http::HttpClient;
use crate::types::{AppError, ModelAction, Result};

const STATUS_FAILED: &str = "Failed to fetch AI model status.";
const INFO_FAILED: &str = "Failed to fetch AI model info.";

/// AI model control panel endpoints. Status and info are opaque snapshots;
/// the stores derive the running/stopped views from them.
#[derive(Clone)]
pub struct AiModelApi {
    http: HttpClient,
}

impl AiModelApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_status(&self) -> Result<Value> {
        self.http
            .get("/ai-model/status")
            .await
            .map_err(|e| AppError::from_http(e, STATUS_FAILED))
    }

    pub async fn get_info(&self) -> Result<Value> {
        self.http
            .get("/ai-model/info")
            .await
            .map_err(|e| AppError::from_http(e, INFO_FAILED))
    }

    pub async fn control(&self, action: ModelAction) -> Result<Value> {
        self.http
            .post_empty(&format!("/ai-model/{action}"))
            .await
            .map_err(|e| {
                AppError::from_http(e, &format!("Failed to {action} the AI model."))
            })
    }
}
