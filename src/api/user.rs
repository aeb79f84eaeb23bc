use serde_json::Value;

use crate::http::HttpClient;
use crate::types::{AppError, Beach, Result, UserProfile};

const ROLE_FAILED: &str = "Failed to fetch user role.";
const PROFILE_FAILED: &str = "Failed to fetch user profile.";
const BEACHES_FAILED: &str = "Failed to fetch accessible beaches.";

#[derive(Clone)]
pub struct UserApi {
    http: HttpClient,
}

impl UserApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_role(&self) -> Result<Value> {
        self.http
            .get("/user/role")
            .await
            .map_err(|e| AppError::from_http(e, ROLE_FAILED))
    }

    pub async fn get_profile(&self) -> Result<UserProfile> {
        self.http
            .get("/user/profile")
            .await
            .map_err(|e| AppError::from_http(e, PROFILE_FAILED))
    }

    pub async fn get_accessible_beaches(&self) -> Result<Vec<Beach>> {
        self.http
            .get("/user/beaches")
            .await
            .map_err(|e| AppError::from_http(e, BEACHES_FAILED))
    }
}
