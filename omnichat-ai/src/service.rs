use async_trait::async_trait;

/// A black-box generative text service: one system instruction, one prompt,
/// one completion. Implementations may fail; [`crate::Assistant`] is the
/// layer that turns failures into fallback text.
#[async_trait]
pub trait AiService: Send + Sync {
    async fn generate(&self, system_instruction: &str, prompt: &str) -> anyhow::Result<String>;
}
