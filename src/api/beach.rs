use crate::http::HttpClient;
use crate::types::{AppError, Beach, BeachRequest, Result};

const FETCH_FAILED: &str = "Failed to fetch beach information.";
const FETCH_ACTIVE_FAILED: &str = "Failed to fetch active beaches.";
const FETCH_BY_REGION_FAILED: &str = "Failed to fetch beaches for the region.";
const FETCH_MINE_FAILED: &str = "Failed to fetch my beaches.";
const SEARCH_FAILED: &str = "Failed to search beaches.";
const CREATE_FAILED: &str = "Failed to create beach.";
const UPDATE_FAILED: &str = "Failed to update beach.";
const DELETE_FAILED: &str = "Failed to delete beach.";
const TOGGLE_FAILED: &str = "Failed to change beach status.";

#[derive(Clone)]
pub struct BeachApi {
    http: HttpClient,
}

impl BeachApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> Result<Vec<Beach>> {
        self.http
            .get("/beaches")
            .await
            .map_err(|e| AppError::from_http(e, FETCH_FAILED))
    }

    pub async fn get_active(&self) -> Result<Vec<Beach>> {
        self.http
            .get("/beaches/active")
            .await
            .map_err(|e| AppError::from_http(e, FETCH_ACTIVE_FAILED))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Beach> {
        self.http
            .get(&format!("/beaches/{id}"))
            .await
            .map_err(|e| AppError::from_http(e, FETCH_FAILED))
    }

    pub async fn get_by_region(&self, region: &str) -> Result<Vec<Beach>> {
        self.http
            .get(&format!("/beaches/region/{region}"))
            .await
            .map_err(|e| AppError::from_http(e, FETCH_BY_REGION_FAILED))
    }

    pub async fn get_mine(&self) -> Result<Vec<Beach>> {
        self.http
            .get("/beaches/my-beaches")
            .await
            .map_err(|e| AppError::from_http(e, FETCH_MINE_FAILED))
    }

    pub async fn search(&self, name: &str) -> Result<Vec<Beach>> {
        self.http
            .get_query("/beaches/search", &[("name", name)])
            .await
            .map_err(|e| AppError::from_http(e, SEARCH_FAILED))
    }

    pub async fn create(&self, beach_data: &BeachRequest) -> Result<Beach> {
        self.http
            .post("/beaches", beach_data)
            .await
            .map_err(|e| AppError::from_http(e, CREATE_FAILED))
    }

    pub async fn update(&self, id: i64, beach_data: &BeachRequest) -> Result<Beach> {
        self.http
            .put(&format!("/beaches/{id}"), beach_data)
            .await
            .map_err(|e| AppError::from_http(e, UPDATE_FAILED))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.http
            .delete(&format!("/beaches/{id}"))
            .await
            .map_err(|e| AppError::from_http(e, DELETE_FAILED))
    }

    pub async fn toggle_status(&self, id: i64) -> Result<Beach> {
        self.http
            .patch(&format!("/beaches/{id}/toggle-status"))
            .await
            .map_err(|e| AppError::from_http(e, TOGGLE_FAILED))
    }
}
