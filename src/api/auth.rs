use serde_json::Value;

use crate::http::HttpClient;
use crate::types::{AppError, AuthResponse, LoginRequest, RegisterRequest, Result, UserProfile};

const LOGIN_FAILED: &str = "Failed to log in.";
const REGISTER_FAILED: &str = "Failed to register.";
const PROFILE_FAILED: &str = "Failed to fetch user profile.";

#[derive(Clone)]
pub struct AuthApi {
    http: HttpClient,
}

impl AuthApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        self.http
            .post("/auth/login", credentials)
            .await
            .map_err(|e| AppError::from_http(e, LOGIN_FAILED))
    }

    pub async fn register(&self, user_data: &RegisterRequest) -> Result<Value> {
        self.http
            .post("/auth/register", user_data)
            .await
            .map_err(|e| AppError::from_http(e, REGISTER_FAILED))
    }

    pub async fn get_profile(&self) -> Result<UserProfile> {
        self.http
            .get("/user/profile")
            .await
            .map_err(|e| AppError::from_http(e, PROFILE_FAILED))
    }
}
