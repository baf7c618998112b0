//! Structured summarization.

use anyhow::Result;
use providers::schema::ResponseSchema;
use providers::tasks::{profile, Task};
use providers::GenerateRequest;
use shared::types::{Language, SummaryLength, SummaryResult};

use crate::{parse, prompts, Assistant};

/// Declared output shape: all three fields required.
pub fn summary_schema() -> ResponseSchema {
    ResponseSchema::object(
        vec![
            ("summary", ResponseSchema::String),
            ("bulletPoints", ResponseSchema::array(ResponseSchema::String)),
            ("keyTakeaways", ResponseSchema::array(ResponseSchema::String)),
        ],
        &["summary", "bulletPoints", "keyTakeaways"],
    )
}

impl Assistant {
    /// Summarize `text` at the requested verbosity, localized to `lang`.
    ///
    /// The caller guards against empty input; the operation does not
    /// re-validate. A payload that does not carry all three fields is a
    /// failure, never a default-filled result.
    pub async fn summarize(
        &self,
        text: &str,
        length: SummaryLength,
        lang: Language,
    ) -> Result<SummaryResult> {
        let profile = profile(Task::Summarize, &self.settings().model);
        let request = GenerateRequest::prompt(
            profile.model,
            prompts::summarize_prompt(text, length, lang),
        )
        .with_schema(summary_schema());

        let raw = self.dispatch(request).await?;
        parse::decode_json(&raw)
    }
}
