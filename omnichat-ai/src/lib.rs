//! # omnichat-ai
//!
//! AI collaborator seam: the [`AiService`] trait (one-shot generation), the
//! [`Assistant`] wrapper that renders conversation history into prompts and
//! degrades every failure to a fixed fallback string, and the
//! [`OpenAiService`] chat-completions adapter.

mod assistant;
mod openai;
mod service;

pub use assistant::Assistant;
pub use openai::OpenAiService;
pub use service::AiService;
