use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::error::AssistantError;
use shared::settings::ProviderAuth;
use shared::types::ChatMessage;
use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::schema::ResponseSchema;
use crate::GenerateModel;

static SHARED_HTTP: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_max_idle_per_host(2)
        .build()
        .expect("failed to build HTTP client")
});

/// One dispatch to the backend: a chosen model identifier, the built
/// content, and the optional schema / grounding / system-instruction
/// configuration. Exactly one network call per request, no retry.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    /// Turn sequence sent as `contents`. A plain prompt is one user turn.
    pub contents: Vec<ChatMessage>,
    pub system_instruction: Option<String>,
    /// Declaring a schema also switches the response to JSON mode.
    pub response_schema: Option<ResponseSchema>,
    /// Ask the backend to consult external sources before answering.
    pub google_search: bool,
}

impl GenerateRequest {
    /// A single-turn prompt with no schema and no grounding.
    pub fn prompt(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            contents: vec![ChatMessage::user(text)],
            system_instruction: None,
            response_schema: None,
            google_search: false,
        }
    }

    /// A multi-turn conversation; `contents` must already be in order,
    /// newest turn last.
    pub fn conversation(model: impl Into<String>, contents: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            contents,
            system_instruction: None,
            response_schema: None,
            google_search: false,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_google_search(mut self, enabled: bool) -> Self {
        self.google_search = enabled;
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: ResponseSchema,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GeminiRequestBody {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiCandidatePart {
    text: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiCandidateContent {
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

pub struct GeminiClient {
    http: Client,
    auth_token: String,
}

impl GeminiClient {
    pub fn new() -> Result<Self> {
        let key = env::var("GEMINI_API_KEY").map_err(|_| anyhow!("GEMINI_API_KEY not set"))?;
        Ok(Self {
            http: SHARED_HTTP.clone(),
            auth_token: key,
        })
    }

    pub fn from_auth(auth: &ProviderAuth) -> Result<Self> {
        let auth_token = if let Some(api_key) = &auth.api_key {
            api_key.clone()
        } else {
            // Environment variable as fallback
            env::var("GEMINI_API_KEY").map_err(|_| AssistantError::MissingCredential)?
        };

        Ok(Self {
            http: SHARED_HTTP.clone(),
            auth_token,
        })
    }

    fn build_body(request: &GenerateRequest) -> GeminiRequestBody {
        let contents = request
            .contents
            .iter()
            .map(|m| GeminiContent {
                role: m.role.as_str().to_string(),
                parts: vec![GeminiPart {
                    text: m.text.clone(),
                }],
            })
            .collect();

        let system_instruction = request.system_instruction.as_ref().map(|text| GeminiContent {
            role: "system".to_string(),
            parts: vec![GeminiPart { text: text.clone() }],
        });

        let generation_config = request
            .response_schema
            .clone()
            .map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            });

        let tools = request.google_search.then(|| {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        });

        GeminiRequestBody {
            contents,
            system_instruction,
            generation_config,
            tools,
        }
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            request.model, self.auth_token
        );
        tracing::debug!(
            model = %request.model,
            turns = request.contents.len(),
            grounded = request.google_search,
            "dispatching generateContent"
        );

        let body = Self::build_body(&request);
        let resp = self.http.post(url).json(&body).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let detail: String = body.trim().chars().take(800).collect();
            if detail.is_empty() {
                return Err(anyhow!("gemini error: {}", status));
            }
            return Err(anyhow!("gemini error: {}\n{}", status, detail));
        }

        let body: GeminiResponse = resp.json().await?;
        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default();
        Ok(text)
    }
}

#[async_trait]
impl GenerateModel for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        GeminiClient::generate(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ResponseSchema;
    use serde_json::json;
    use shared::types::ChatMessage;

    #[test]
    fn plain_prompt_is_one_user_turn() {
        let body = GeminiClient::build_body(&GenerateRequest::prompt("m", "hello"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert!(value.get("system_instruction").is_none());
        assert!(value.get("generation_config").is_none());
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn schema_switches_to_json_mode() {
        let request = GenerateRequest::prompt("m", "p")
            .with_schema(ResponseSchema::object(
                vec![("summary", ResponseSchema::String)],
                &["summary"],
            ));
        let value = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        let config = &value["generation_config"];
        assert_eq!(config["response_mime_type"], "application/json");
        assert_eq!(config["response_schema"]["type"], "OBJECT");
        assert_eq!(config["response_schema"]["required"], json!(["summary"]));
    }

    #[test]
    fn google_search_declares_the_tool() {
        let request = GenerateRequest::prompt("m", "p").with_google_search(true);
        let value = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        assert_eq!(value["tools"][0], json!({"google_search": {}}));
    }

    #[test]
    fn conversation_keeps_roles_and_order() {
        let request = GenerateRequest::conversation(
            "m",
            vec![
                ChatMessage::user("q1"),
                ChatMessage::model("a1"),
                ChatMessage::user("q2"),
            ],
        )
        .with_system_instruction("be brief");
        let value = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();

        let roles: Vec<&str> = value["contents"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["user", "model", "user"]);
        assert_eq!(
            value["system_instruction"]["parts"][0]["text"],
            "be brief"
        );
    }

    #[test]
    fn from_auth_prefers_explicit_key() {
        let auth = ProviderAuth {
            api_key: Some("k-123".into()),
        };
        let client = GeminiClient::from_auth(&auth).unwrap();
        assert_eq!(client.auth_token, "k-123");
    }
}
