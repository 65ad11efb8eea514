//! Provider seam
//!
//! The submission flow depends on this trait, not on `GeminiClient`
//! directly, so tests can substitute a canned provider.

use async_trait::async_trait;

use crate::errors::Result;
use crate::prompt::SYSTEM_INSTRUCTION;
use crate::provider::gemini::GeminiClient;

/// An opaque boundary that turns a prompt into free-text advice
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Submit a prompt and return the raw reply text
    async fn generate_advice(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl AdviceProvider for GeminiClient {
    async fn generate_advice(&self, prompt: &str) -> Result<String> {
        self.generate(SYSTEM_INSTRUCTION, prompt).await
    }
}
