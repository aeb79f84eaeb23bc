use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use crate::api::ChatbotApi;
use crate::types::{ChatMessage, MessageKind, Result};

/// Chat transcript plus the backend-side history snapshot.
///
/// The user message is appended before the backend call, optimistically and
/// unconditionally; a failed call leaves it in place with `error` set and no
/// AI reply.
pub struct ChatbotStore {
    api: ChatbotApi,
    state: RwLock<ChatbotState>,
    next_id: AtomicU64,
}

#[derive(Debug, Default)]
struct ChatbotState {
    messages: Vec<ChatMessage>,
    chat_history: Vec<Value>,
    loading: bool,
    error: Option<String>,
}

/// Downloadable chat artifact: the transcript plus per-kind counts.
#[derive(Debug, Clone, Serialize)]
pub struct ChatExport {
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
    pub summary: ChatExportSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatExportSummary {
    pub total: usize,
    pub user: usize,
    pub ai: usize,
}

impl ChatbotStore {
    pub fn new(api: ChatbotApi) -> Self {
        Self {
            api,
            state: RwLock::new(ChatbotState::default()),
            next_id: AtomicU64::new(1),
        }
    }

    // ----- actions -----

    /// Append a message to the transcript. Ids come from a monotonic
    /// counter so two messages in the same millisecond never collide.
    pub fn add_message(&self, content: impl Into<String>, kind: MessageKind) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            content: content.into(),
            kind,
            timestamp: Utc::now(),
        };
        self.state.write().messages.push(message.clone());
        message
    }

    pub fn add_ai_response(&self, content: impl Into<String>) -> ChatMessage {
        self.add_message(content, MessageKind::Ai)
    }

    /// Send a message to the chatbot. The user message is appended first;
    /// on success exactly one AI message is appended from the reply's
    /// `response` field (or `message` when absent).
    pub async fn send_message(&self, message: &str) -> Result<crate::types::ChatReply> {
        self.begin();
        self.add_message(message, MessageKind::User);

        let result = self.api.send_message(message).await;
        if let Ok(reply) = &result {
            self.add_ai_response(reply.text());
        }
        self.complete(result)
    }

    pub async fn fetch_quick_questions(&self) -> Result<Vec<Value>> {
        self.begin();
        let result = self.api.get_quick_questions().await;
        self.complete(result)
    }

    pub async fn fetch_chat_history(&self) -> Result<Vec<Value>> {
        self.begin();
        let result = self.api.get_history().await;
        if let Ok(history) = &result {
            self.state.write().chat_history = history.clone();
        }
        self.complete(result)
    }

    /// Wipe the transcript and any pending error.
    pub fn clear_chat(&self) {
        let mut state = self.state.write();
        state.messages.clear();
        state.error = None;
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    /// Build the export artifact. Pure client-side; no backend involvement.
    pub fn export_chat(&self) -> ChatExport {
        let state = self.state.read();
        let user = state
            .messages
            .iter()
            .filter(|m| m.kind == MessageKind::User)
            .count();
        let ai = state
            .messages
            .iter()
            .filter(|m| m.kind == MessageKind::Ai)
            .count();
        ChatExport {
            timestamp: Utc::now(),
            messages: state.messages.clone(),
            summary: ChatExportSummary {
                total: state.messages.len(),
                user,
                ai,
            },
        }
    }

    pub fn export_chat_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.export_chat())
    }

    /// Suggested download name, e.g. `chat-export-2026-08-28.json`.
    pub fn export_file_name(&self) -> String {
        format!("chat-export-{}.json", Utc::now().format("%Y-%m-%d"))
    }

    // ----- derived views -----

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.read().messages.clone()
    }

    pub fn chat_history(&self) -> Vec<Value> {
        self.state.read().chat_history.clone()
    }

    pub fn message_count(&self) -> usize {
        self.state.read().messages.len()
    }

    pub fn user_message_count(&self) -> usize {
        self.state
            .read()
            .messages
            .iter()
            .filter(|m| m.kind == MessageKind::User)
            .count()
    }

    pub fn ai_message_count(&self) -> usize {
        self.state
            .read()
            .messages
            .iter()
            .filter(|m| m.kind == MessageKind::Ai)
            .count()
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
