use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============= Authentication Types =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

/// Profile payload from `GET /user/profile`. Every field is optional so a
/// partial response backfills only what it carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::User => "USER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "MANAGER" => Some(Role::Manager),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

/// The authenticated user's identity record, mirrored between the durable
/// session store and the auth store's in-memory state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub username: String,
    pub role: Option<Role>,
    pub email: String,
}

impl Session {
    /// Token present means logged in.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

// ============= Beach Types =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeachStatus {
    Active,
    Inactive,
}

/// Beach record as the backend returns it. Server-defined fields the client
/// does not interpret are kept in `extra` so round trips stay lossless.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beach {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_path: Option<String>,
    pub status: BeachStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Create/update payload for a beach. Only the client-editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeachRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BeachStatus>,
}

// ============= Chatbot Types =============

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat reply from the backend. Older backend builds answered with a
/// `message` field instead of `response`, so both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "messageId")]
    pub message_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ChatReply {
    /// The text to surface as the AI message: `response`, else `message`.
    pub fn text(&self) -> &str {
        self.response
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Ai,
}

/// A message in the local chat transcript. Ids come from a per-store
/// monotonic counter, not from wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub timestamp: DateTime<Utc>,
}

// ============= Detection Types =============

/// One AI-detection sample. Shape follows the backend's detection record;
/// anything else the server adds rides along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub person_count: u32,
    #[serde(default)]
    pub fallen_count: u32,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// ============= AI Model Types =============

/// Control verbs accepted by `POST /ai-model/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelAction {
    Start,
    Stop,
    Restart,
}

impl ModelAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelAction::Start => "start",
            ModelAction::Stop => "stop",
            ModelAction::Restart => "restart",
        }
    }
}

impl std::fmt::Display for ModelAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============= Error Types =============

/// Error surfaced by every API wrapper function. Transport failures are
/// collapsed into the operation's fixed fallback message; HTTP errors that
/// carried a JSON body keep that body.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// The backend answered with an error body.
    #[error("{message}")]
    Backend {
        status: u16,
        message: String,
        body: Value,
    },

    /// Transport/timeout failure or bodyless HTTP error, normalized to the
    /// operation's fallback message.
    #[error("{0}")]
    Operation(String),
}

impl AppError {
    /// Normalize a transport-level error at the API-module boundary.
    pub(crate) fn from_http(err: crate::http::HttpError, fallback: &str) -> Self {
        match err {
            crate::http::HttpError::Status {
                status,
                body: Some(body),
            } => {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .or_else(|| body.get("error").and_then(Value::as_str))
                    .unwrap_or(fallback)
                    .to_string();
                AppError::Backend {
                    status,
                    message,
                    body,
                }
            }
            other => {
                tracing::debug!(error = %other, "request failed without usable body");
                AppError::Operation(fallback.to_string())
            }
        }
    }

    /// HTTP status of the failure, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Backend { status, .. } => Some(*status),
            AppError::Operation(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
