//! Freeform translation between the supported languages.

use anyhow::Result;
use providers::tasks::{profile, Task};
use providers::GenerateRequest;
use shared::types::Language;

use crate::{prompts, Assistant};

impl Assistant {
    /// Translate `text` from `source` to `target`.
    ///
    /// Freeform call: the payload passes through as-is, and an absent
    /// payload is an empty string, not an error.
    pub async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        let profile = profile(Task::Translate, &self.settings().model);
        let request = GenerateRequest::prompt(
            profile.model,
            prompts::translate_prompt(text, source, target),
        );
        self.dispatch(request).await
    }
}
