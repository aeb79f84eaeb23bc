use serde_json::Value;

use crate::http::HttpClient;
use crate::types::{AppError, ChatReply, ChatRequest, Result};

const CHAT_FAILED: &str = "No response received from the chatbot.";
const HISTORY_FAILED: &str = "Failed to fetch chat history.";
const QUICK_QUESTIONS_FAILED: &str = "Failed to fetch quick questions.";

#[derive(Clone)]
pub struct ChatbotApi {
    http: HttpClient,
}

impl ChatbotApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn send_message(&self, message: &str) -> Result<ChatReply> {
        let body = ChatRequest {
            message: message.to_string(),
        };
        self.http
            .post("/chatbot/chat", &body)
            .await
            .map_err(|e| AppError::from_http(e, CHAT_FAILED))
    }

    pub async fn get_history(&self) -> Result<Vec<Value>> {
        self.http
            .get("/chatbot/history")
            .await
            .map_err(|e| AppError::from_http(e, HISTORY_FAILED))
    }

    pub async fn get_quick_questions(&self) -> Result<Vec<Value>> {
        self.http
            .get("/chatbot/quick-questions")
            .await
            .map_err(|e| AppError::from_http(e, QUICK_QUESTIONS_FAILED))
    }
}
