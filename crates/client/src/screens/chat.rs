//! Assistant chat screen.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::ChatApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Canned prompts offered next to the input field.
pub const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("List Products", "Liste tous les produits disponibles"),
    ("List Clients", "Liste tous les clients"),
    ("Search Product", "Donne moi le produit avec ID 1"),
    ("Summary", "Donne moi un résumé des produits et clients"),
];

const AGENT_ERROR: &str = "Erreur lors de la communication avec l'agent. Veuillez réessayer.";

pub struct ChatScreen {
    api: Arc<dyn ChatApi>,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl ChatScreen {
    pub fn new(api: Arc<dyn ChatApi>) -> Self {
        Self {
            api,
            messages: Vec::new(),
            loading: false,
        }
    }

    /// Send a message and append the reply to the transcript.
    ///
    /// Blank input and sends while a call is in flight are ignored. A
    /// failed call appends the fixed error line as an assistant message so
    /// the transcript stays coherent.
    pub async fn send(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() || self.loading {
            return;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: text.to_string(),
            timestamp: Utc::now(),
        });
        self.loading = true;

        let content = match self.api.send(text).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(%err, "chat call failed");
                AGENT_ERROR.to_string()
            }
        };
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content,
            timestamp: Utc::now(),
        });
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
