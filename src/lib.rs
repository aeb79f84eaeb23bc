//! # Shorewatch client SDK
//!
//! Typed client for a beach crowd monitoring backend: beach listings,
//! AI-detection results, authentication, an AI-model control panel, and a
//! chatbot. The crate provides three layers:
//!
//! 1. **HTTP wrapper** ([`http`]) - one configured `reqwest` client with a
//!    fixed timeout, bearer-token injection from a shared session context,
//!    and out-of-band 401 handling.
//! 2. **API modules** ([`api`]) - one async function per backend endpoint,
//!    with failures normalized to the backend's error body or a fixed
//!    per-operation fallback message.
//! 3. **Stores** ([`stores`]) - owned slices of client state with uniform
//!    loading/error flags, plus the route table and navigation guard
//!    ([`routes`]).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use shorewatch::{App, ClientConfig, LoginRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = App::new(&ClientConfig::from_env())?;
//!
//!     app.auth
//!         .login(LoginRequest {
//!             username: "admin".into(),
//!             password: "secret".into(),
//!         })
//!         .await?;
//!
//!     let beaches = app.beaches.fetch_all_beaches().await?;
//!     println!("{} beaches", beaches.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Session model
//!
//! The durable session is four flat string entries (`token`, `username`,
//! `role`, `email`) behind the [`session::SessionStore`] trait. Any HTTP 401
//! clears them and broadcasts [`session::SessionEvent::Unauthorized`]; the
//! embedding shell decides how to navigate.

pub mod api;
pub mod app;
pub mod http;
pub mod routes;
pub mod session;
pub mod stores;
pub mod types;
pub mod utils;

// Common entry points
pub use app::App;
pub use routes::{before_navigation, NavigationDecision, Route, RouteMeta, ROUTES};
pub use session::{FileSessionStore, MemorySessionStore, SessionContext, SessionEvent, SessionStore};
pub use stores::{AiModelStore, AuthStore, BeachStore, ChatbotStore, DetectionStore};
pub use types::{
    AppError, AuthResponse, Beach, BeachRequest, BeachStatus, ChatMessage, ChatReply, Detection,
    LoginRequest, MessageKind, ModelAction, RegisterRequest, Result, Role, Session, UserProfile,
};
pub use utils::ClientConfig;
