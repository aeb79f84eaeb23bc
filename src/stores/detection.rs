use std::collections::HashMap;

use parking_lot::RwLock;

use crate::api::DetectionApi;
use crate::types::{Detection, Result};

/// Latest AI-detection results, globally and per beach name. Per-beach
/// entries are fully replaced on each fetch; nothing is merged.
pub struct DetectionStore {
    api: DetectionApi,
    state: RwLock<DetectionState>,
}

#[derive(Debug, Default)]
struct DetectionState {
    latest_detections: Vec<Detection>,
    beach_detections: HashMap<String, Vec<Detection>>,
    loading: bool,
    error: Option<String>,
}

impl DetectionStore {
    pub fn new(api: DetectionApi) -> Self {
        Self {
            api,
            state: RwLock::new(DetectionState::default()),
        }
    }

    // ----- actions -----

    pub async fn fetch_latest_detections(&self) -> Result<Vec<Detection>> {
        self.begin();
        let result = self.api.get_latest().await;
        if let Ok(detections) = &result {
            self.state.write().latest_detections = detections.clone();
        }
        self.complete(result)
    }

    pub async fn fetch_beach_detections(&self, beach_name: &str) -> Result<Vec<Detection>> {
        self.begin();
        let result = self.api.get_latest_by_beach(beach_name).await;
        if let Ok(detections) = &result {
            self.state
                .write()
                .beach_detections
                .insert(beach_name.to_string(), detections.clone());
        }
        self.complete(result)
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    // ----- derived views -----

    pub fn latest_detections(&self) -> Vec<Detection> {
        self.state.read().latest_detections.clone()
    }

    pub fn latest_detection_count(&self) -> usize {
        self.state.read().latest_detections.len()
    }

    /// Detections for one beach; empty when the beach was never fetched.
    pub fn beach_detections(&self, beach_name: &str) -> Vec<Detection> {
        self.state
            .read()
            .beach_detections
            .get(beach_name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
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
