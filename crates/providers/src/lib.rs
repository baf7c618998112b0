//! HTTP client for the generative-language backend, plus the declarative
//! pieces every call site shares: the response-schema descriptor and the
//! task-to-model configuration table.

pub mod gemini;
pub mod schema;
pub mod tasks;

use anyhow::Result;
use async_trait::async_trait;

pub use gemini::{GeminiClient, GenerateRequest};

/// Dispatch seam for the operation layer: one request in, raw text out.
///
/// The real implementation is [`GeminiClient`]; tests inject fakes so
/// operations can be exercised without a network or a credential.
#[async_trait]
pub trait GenerateModel: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<String>;
}
