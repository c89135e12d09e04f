//! `/counsellor` endpoints

use super::client::ApiClient;
use super::types::{ChatMessage, ChatRequest, CounsellorReply};
use crate::error::Result;

/// AI counsellor conversation
pub struct CounsellorApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CounsellorApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /counsellor/history`, oldest first
    pub async fn history(&self) -> Result<Vec<ChatMessage>> {
        self.client.get("/counsellor/history").await
    }

    /// `POST /counsellor/chat`
    pub async fn chat(&self, content: &str) -> Result<CounsellorReply> {
        let body = ChatRequest {
            content: content.to_string(),
        };
        self.client.post("/counsellor/chat", &body).await
    }
}
