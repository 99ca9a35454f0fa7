use async_trait::async_trait;

pub mod gemini;

/// A remote text-completion service: prompt in, completion out.
#[async_trait]
pub trait LLM {
    type Error: std::error::Error + Send + Sync + Into<crate::Error> + 'static;

    async fn generate(&mut self, prompt: &str) -> Result<String, Self::Error>;
}
