pub mod conversation;
pub mod types;

pub mod settings {
    use serde::{Deserialize, Serialize};

    use crate::types::Language;

    /// Authentication for the Gemini backend.
    ///
    /// Resolution order is the explicit key, then the `GEMINI_API_KEY`
    /// environment variable. Neither present surfaces as a configuration
    /// error at first call, not at startup.
    #[derive(Debug, Clone, Serialize, Deserialize, Default)]
    pub struct ProviderAuth {
        pub api_key: Option<String>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ModelConfig {
        /// Fast identifier used by summarize/translate/chat.
        pub flash_model: String,
        /// Search-capable identifier used by continuation lookups.
        pub pro_model: String,
    }

    impl Default for ModelConfig {
        fn default() -> Self {
            Self {
                flash_model: "gemini-3-flash-preview".into(),
                pro_model: "gemini-3-pro-preview".into(),
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct AppSettings {
        pub model: ModelConfig,
        pub gemini_auth: ProviderAuth,
        /// Language for status and failure messages shown to the user.
        pub ui_language: Language,
    }

    impl Default for AppSettings {
        fn default() -> Self {
            Self {
                model: ModelConfig::default(),
                gemini_auth: ProviderAuth::default(),
                ui_language: Language::English,
            }
        }
    }
}

pub mod error {
    /// Failure classes the front-end tells apart before collapsing them
    /// into a generic localized message.
    #[derive(Debug, thiserror::Error)]
    pub enum AssistantError {
        #[error("No Gemini authentication configured")]
        MissingCredential,

        #[error("model returned an empty response")]
        EmptyResponse,

        #[error("response did not match the expected shape: {0}")]
        Decode(String),
    }
}
