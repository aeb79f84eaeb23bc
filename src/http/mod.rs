//! HTTP client wrapper.
//!
//! One configured `reqwest` client: base URL from [`ClientConfig`], fixed
//! timeout, JSON content type, bearer token injected from the shared
//! [`SessionContext`] on every outgoing request. Any 401 response clears the
//! persisted session and broadcasts an unauthorized event before the error
//! is returned to the caller.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::session::SessionContext;
use crate::utils::ClientConfig;

/// Transport-level error. Normalized into `AppError` at the API-module
/// boundary; exposed for callers that use the wrapper directly.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response; `body` holds the parsed JSON body when there was one.
    #[error("http status {status}")]
    Status { status: u16, body: Option<Value> },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig, session: Arc<SessionContext>) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let text = self.send(Method::GET, path, None, None).await?;
        decode(&text)
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        let text = self.send(Method::GET, path, Some(query), None).await?;
        decode(&text)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let body = serde_json::to_value(body).map_err(|e| HttpError::Decode(e.to_string()))?;
        let text = self.send(Method::POST, path, None, Some(body)).await?;
        decode(&text)
    }

    /// POST with an empty body (the AI-model control endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let text = self.send(Method::POST, path, None, None).await?;
        decode(&text)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let body = serde_json::to_value(body).map_err(|e| HttpError::Decode(e.to_string()))?;
        let text = self.send(Method::PUT, path, None, Some(body)).await?;
        decode(&text)
    }

    /// PATCH with an empty body (status toggle).
    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let text = self.send(Method::PATCH, path, None, None).await?;
        decode(&text)
    }

    /// DELETE; the response body, if any, is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.send(Method::DELETE, path, None, None).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<Value>,
    ) -> Result<String, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .inner
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%url, "unauthorized response, clearing session");
            self.session.handle_unauthorized();
        }

        if !status.is_success() {
            let body = serde_json::from_str::<Value>(&text).ok();
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(text)
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, HttpError> {
    serde_json::from_str(text).map_err(|e| HttpError::Decode(e.to_string()))
}
