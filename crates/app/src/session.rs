//! Per-run state for the summarize surface.

use anyhow::Result;
use assistant::Assistant;
use shared::conversation::ConversationLog;
use shared::types::{ChatMessage, Language, SummaryLength, SummaryResult};

/// What the summarize surface owns: the source text, the last good
/// result, and the Q&A log. A failed call never touches any of it.
#[derive(Default)]
pub struct SummarySession {
    source_text: String,
    result: Option<SummaryResult>,
    chat: ConversationLog,
}

impl SummarySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        self.result.as_ref()
    }

    pub fn chat(&self) -> &ConversationLog {
        &self.chat
    }

    /// Summarize a new base text. On success the result replaces the
    /// previous one and the Q&A log starts over; on failure everything
    /// stays as it was.
    pub async fn summarize(
        &mut self,
        assistant: &Assistant,
        text: String,
        length: SummaryLength,
        lang: Language,
    ) -> Result<&SummaryResult> {
        let result = assistant.summarize(&text, length, lang).await?;
        self.source_text = text;
        self.chat.reset();
        Ok(self.result.insert(result))
    }

    /// Send one follow-up question about the current summary.
    ///
    /// The user's turn is kept even when the call fails; the fallback is
    /// appended in place of a reply so the conversation stays continuous.
    /// The history replayed to the model is the log as it stood before
    /// this question.
    pub async fn send_message(
        &mut self,
        assistant: &Assistant,
        message: &str,
        lang: Language,
        fallback: &str,
    ) -> String {
        let summary = match &self.result {
            Some(result) => result.summary.clone(),
            None => return fallback.to_string(),
        };

        let history = self.chat.clone();
        self.chat.append(ChatMessage::user(message));

        match assistant
            .chat_followup(&self.source_text, &summary, message, &history, lang)
            .await
        {
            Ok(reply) => {
                self.chat.append(ChatMessage::model(reply.clone()));
                reply
            }
            Err(err) => {
                tracing::error!(error = %err, "chat follow-up failed");
                self.chat.append(ChatMessage::model(fallback));
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use providers::{GenerateModel, GenerateRequest};
    use shared::settings::AppSettings;
    use shared::types::ChatRole;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    const SUMMARY_JSON: &str = r#"{
        "summary": "A short tale.",
        "bulletPoints": ["one"],
        "keyTakeaways": ["two"]
    }"#;

    #[derive(Default)]
    struct ScriptedModel {
        responses: Mutex<VecDeque<Result<String, String>>>,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    impl ScriptedModel {
        fn push_ok(&self, payload: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(payload.to_string()));
        }

        fn push_err(&self, message: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(message.to_string()));
        }
    }

    #[async_trait]
    impl GenerateModel for ScriptedModel {
        async fn generate(&self, request: GenerateRequest) -> anyhow::Result<String> {
            self.requests.lock().unwrap().push(request);
            match self.responses.lock().unwrap().pop_front() {
                Some(Ok(payload)) => Ok(payload),
                Some(Err(message)) => Err(anyhow!(message)),
                None => Err(anyhow!("scripted model exhausted")),
            }
        }
    }

    fn wired() -> (Arc<ScriptedModel>, Assistant) {
        let model = Arc::new(ScriptedModel::default());
        let assistant = Assistant::with_client(AppSettings::default(), model.clone());
        (model, assistant)
    }

    #[tokio::test]
    async fn new_summary_resets_the_chat() {
        let (model, assistant) = wired();
        model.push_ok(SUMMARY_JSON);
        model.push_ok("a reply");
        model.push_ok(SUMMARY_JSON);

        let mut session = SummarySession::new();
        session
            .summarize(&assistant, "text one".into(), SummaryLength::Short, Language::English)
            .await
            .unwrap();
        session
            .send_message(&assistant, "a question", Language::English, "fallback")
            .await;
        assert_eq!(session.chat().len(), 2);

        session
            .summarize(&assistant, "text two".into(), SummaryLength::Short, Language::English)
            .await
            .unwrap();
        assert!(session.chat().is_empty());
    }

    #[tokio::test]
    async fn failed_summary_keeps_prior_state() {
        let (model, assistant) = wired();
        model.push_ok(SUMMARY_JSON);
        model.push_ok("a reply");
        model.push_err("gemini error: 500");

        let mut session = SummarySession::new();
        session
            .summarize(&assistant, "good text".into(), SummaryLength::Medium, Language::English)
            .await
            .unwrap();
        session
            .send_message(&assistant, "q", Language::English, "fallback")
            .await;

        let result = session
            .summarize(&assistant, "bad text".into(), SummaryLength::Medium, Language::English)
            .await;
        assert!(result.is_err());

        // Last-good result and the running conversation are untouched.
        assert_eq!(session.result().unwrap().summary, "A short tale.");
        assert_eq!(session.chat().len(), 2);
    }

    #[tokio::test]
    async fn failed_chat_appends_fallback_after_the_user_turn() {
        let (model, assistant) = wired();
        model.push_ok(SUMMARY_JSON);
        model.push_err("gemini error: 429");

        let mut session = SummarySession::new();
        session
            .summarize(&assistant, "text".into(), SummaryLength::Short, Language::Indonesian)
            .await
            .unwrap();
        let reply = session
            .send_message(&assistant, "pertanyaan", Language::Indonesian, "Maaf, terjadi kesalahan.")
            .await;

        assert_eq!(reply, "Maaf, terjadi kesalahan.");
        let turns = session.chat().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, ChatRole::User);
        assert_eq!(turns[0].text, "pertanyaan");
        assert_eq!(turns[1].role, ChatRole::Model);
        assert_eq!(turns[1].text, "Maaf, terjadi kesalahan.");
    }

    #[tokio::test]
    async fn replays_earlier_turns_on_the_next_question() {
        let (model, assistant) = wired();
        model.push_ok(SUMMARY_JSON);
        model.push_ok("first reply");
        model.push_ok("second reply");

        let mut session = SummarySession::new();
        session
            .summarize(&assistant, "text".into(), SummaryLength::Short, Language::English)
            .await
            .unwrap();
        session
            .send_message(&assistant, "first question", Language::English, "fb")
            .await;
        session
            .send_message(&assistant, "second question", Language::English, "fb")
            .await;

        let requests = model.requests.lock().unwrap();
        // Request 0 is the summarize call; request 2 carries the first
        // exchange verbatim before the new question.
        let turns: Vec<(ChatRole, &str)> = requests[2]
            .contents
            .iter()
            .map(|t| (t.role, t.text.as_str()))
            .collect();
        assert_eq!(
            turns,
            vec![
                (ChatRole::User, "first question"),
                (ChatRole::Model, "first reply"),
                (ChatRole::User, "second question"),
            ]
        );
    }

    #[tokio::test]
    async fn no_summary_means_no_dispatch() {
        let (model, assistant) = wired();
        let mut session = SummarySession::new();
        let reply = session
            .send_message(&assistant, "question", Language::English, "fallback")
            .await;
        assert_eq!(reply, "fallback");
        assert!(model.requests.lock().unwrap().is_empty());
        assert!(session.chat().is_empty());
    }
}
