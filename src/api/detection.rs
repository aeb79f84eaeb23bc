use crate::http::HttpClient;
use crate::types::{AppError, Detection, Result};

const LATEST_FAILED: &str = "Failed to fetch latest detections.";
const BEACH_FAILED: &str = "Failed to fetch detections for the beach.";

#[derive(Clone)]
pub struct DetectionApi {
    http: HttpClient,
}

impl DetectionApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_latest(&self) -> Result<Vec<Detection>> {
        self.http
            .get("/detections/latest")
            .await
            .map_err(|e| AppError::from_http(e, LATEST_FAILED))
    }

    pub async fn get_latest_by_beach(&self, beach_name: &str) -> Result<Vec<Detection>> {
        self.http
            .get(&format!("/detections/beach/{beach_name}/latest"))
            .await
            .map_err(|e| AppError::from_http(e, BEACH_FAILED))
    }
}
