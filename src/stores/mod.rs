//! Reactive state stores.
//!
//! Each store owns one slice of client-side state behind a
//! `parking_lot::RwLock` and exposes async actions with a uniform shape:
//! set `loading`, clear `error`, perform exactly one API call, write the
//! result into state, and always drop `loading` again in a completion step
//! shared by both paths. Actions return `Result<T, AppError>`; the formatted
//! message also lands in the store's `error` field for inline UI display.
//! Locks are never held across an await.

pub mod ai_model;
pub mod auth;
pub mod beach;
pub mod chatbot;
pub mod detection;

pub use ai_model::AiModelStore;
pub use auth::AuthStore;
pub use beach::BeachStore;
pub use chatbot::{ChatExport, ChatExportSummary, ChatbotStore};
pub use detection::DetectionStore;
