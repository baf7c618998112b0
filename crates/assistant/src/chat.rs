//! Q&A follow-up over a produced summary.

use anyhow::Result;
use providers::tasks::{profile, Task};
use providers::GenerateRequest;
use shared::conversation::ConversationLog;
use shared::types::{ChatMessage, Language};

use crate::{prompts, Assistant};

impl Assistant {
    /// Answer a follow-up question about a summarized text.
    ///
    /// The backend keeps no memory between calls, so `history` is replayed
    /// verbatim as the prior turns and `message` goes on the end as the
    /// newest user turn. The caller owns the log and appends both sides of
    /// the exchange itself.
    pub async fn chat_followup(
        &self,
        original_text: &str,
        prior_summary: &str,
        message: &str,
        history: &ConversationLog,
        lang: Language,
    ) -> Result<String> {
        let profile = profile(Task::Chat, &self.settings().model);

        let mut contents: Vec<ChatMessage> = history.turns().to_vec();
        contents.push(ChatMessage::user(message));

        let request = GenerateRequest::conversation(profile.model, contents)
            .with_system_instruction(prompts::chat_system_instruction(
                original_text,
                prior_summary,
                lang,
            ));
        self.dispatch(request).await
    }
}
