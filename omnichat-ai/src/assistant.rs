//! Assistant: renders conversation history into prompts for summarization
//! and reply suggestion, and maps every service failure to a fixed fallback
//! string. Neither entry point ever surfaces an error to the caller.

use crate::service::AiService;
use omnichat_core::Message;
use std::sync::Arc;
use tracing::error;

// --- User-facing fallback messages (shown instead of a blocking error) ---
const MSG_SUMMARY_FAILED: &str = "Could not generate summary at this time.";
const MSG_SUMMARY_EMPTY: &str = "Failed to generate summary.";
const MSG_SUGGESTION_FAILED: &str = "Error getting suggestion.";
const MSG_SUGGESTION_EMPTY: &str = "I'm sorry, I can't think of a reply right now.";

const SUMMARY_SYSTEM_INSTRUCTION: &str = "You are a helpful customer support assistant. Provide short, bulleted summaries of the main issue and current status.";
const SUGGESTION_SYSTEM_INSTRUCTION: &str =
    "You are an expert customer success manager. Suggest helpful, empathetic, and concise replies.";

#[derive(Clone)]
pub struct Assistant {
    service: Arc<dyn AiService>,
}

impl Assistant {
    pub fn new(service: Arc<dyn AiService>) -> Self {
        Self { service }
    }

    /// Concise summary of the conversation so far.
    pub async fn summarize(&self, messages: &[Message]) -> String {
        let prompt = format!(
            "Summarize this customer support conversation concisely:\n\n{}",
            render_history(messages)
        );
        match self.service.generate(SUMMARY_SYSTEM_INSTRUCTION, &prompt).await {
            Ok(text) if text.is_empty() => MSG_SUMMARY_EMPTY.to_string(),
            Ok(text) => text,
            Err(e) => {
                error!("Summary generation failed: {}", e);
                MSG_SUMMARY_FAILED.to_string()
            }
        }
    }

    /// A professional next reply the agent could send.
    pub async fn suggest_reply(&self, messages: &[Message]) -> String {
        let prompt = format!(
            "Based on this conversation, suggest a professional next reply for the agent:\n\n{}",
            render_history(messages)
        );
        match self
            .service
            .generate(SUGGESTION_SYSTEM_INSTRUCTION, &prompt)
            .await
        {
            Ok(text) if text.is_empty() => MSG_SUGGESTION_EMPTY.to_string(),
            Ok(text) => text,
            Err(e) => {
                error!("Reply suggestion failed: {}", e);
                MSG_SUGGESTION_FAILED.to_string()
            }
        }
    }
}

/// One line per message: agent-authored messages speak as "Agent", contact
/// messages as "Customer".
fn render_history(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| {
            if m.is_me {
                format!("Agent: {}", m.text)
            } else {
                format!("Customer: {}", m.text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
