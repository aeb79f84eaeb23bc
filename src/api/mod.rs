//! Typed API wrapper modules, one per backend resource.
//!
//! Each function is a single call through the HTTP wrapper with a fixed
//! method and path. Failures are normalized here: the backend's error body
//! when it sent one, otherwise a fixed per-operation fallback message. No
//! retries, no client-side validation.

pub mod ai_model;
pub mod auth;
pub mod beach;
pub mod chatbot;
pub mod detection;
pub mod user;

pub use ai_model::AiModelApi;
pub use auth::AuthApi;
pub use beach::BeachApi;
pub use chatbot::ChatbotApi;
pub use detection::DetectionApi;
pub use user::UserApi;
