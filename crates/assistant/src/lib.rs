//! Operation layer: prompt construction, dispatch, and response decoding
//! for the three assistant features and the summary Q&A follow-up.
//!
//! Each operation is one suspending call: build the instruction, send
//! exactly one request to the backend, decode the payload. Nothing is
//! retried and nothing partial is ever returned.

pub mod chat;
pub mod continuation;
pub mod parse;
pub mod prompts;
pub mod summarizer;
pub mod translator;

use std::sync::Arc;

use anyhow::Result;
use providers::gemini::GeminiClient;
use providers::{GenerateModel, GenerateRequest};
use shared::settings::AppSettings;

/// Front door for the four operations.
///
/// Holds the settings and, optionally, an injected dispatcher. Without an
/// injected one the real client is built per call, so a missing credential
/// surfaces as an error on first use rather than a crash at startup.
pub struct Assistant {
    settings: AppSettings,
    client: Option<Arc<dyn GenerateModel>>,
}

impl Assistant {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            client: None,
        }
    }

    /// Use a caller-supplied dispatcher instead of the real client.
    pub fn with_client(settings: AppSettings, client: Arc<dyn GenerateModel>) -> Self {
        Self {
            settings,
            client: Some(client),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub(crate) async fn dispatch(&self, request: GenerateRequest) -> Result<String> {
        match &self.client {
            Some(client) => client.generate(request).await,
            None => {
                GeminiClient::from_auth(&self.settings.gemini_auth)?
                    .generate(request)
                    .await
            }
        }
    }
}
