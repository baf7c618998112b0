//! Core domain types shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the assistant understands, both as a translation endpoint and
/// as a response-localization directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "ja")]
    Japanese,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Indonesian, Language::Japanese]
    }

    /// Two-letter code used on the wire and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Indonesian => "id",
            Language::Japanese => "ja",
        }
    }

    /// Name embedded in prompts ("provide the synopsis in Indonesian").
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Indonesian => "Indonesian",
            Language::Japanese => "Japanese",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "id" | "indonesian" => Ok(Language::Indonesian),
            "ja" | "japanese" => Ok(Language::Japanese),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Requested summary verbosity. Selects prompt wording, not a word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Detailed,
}

impl SummaryLength {
    pub fn all() -> &'static [SummaryLength] {
        &[
            SummaryLength::Short,
            SummaryLength::Medium,
            SummaryLength::Detailed,
        ]
    }

    /// Token embedded verbatim in the summarize instruction.
    pub fn token(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Detailed => "detailed",
        }
    }
}

impl FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "detailed" => Ok(SummaryLength::Detailed),
            other => Err(format!("unknown summary length: {}", other)),
        }
    }
}

/// Turn attribution. The backend only knows "user" and "model" roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One exchange unit in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Structured summarization output. All three fields are required; a
/// payload missing any of them fails decode rather than default-filling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    pub bullet_points: Vec<String>,
    pub key_takeaways: Vec<String>,
}

/// How a marketplace sells the volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketplaceFormat {
    Physical,
    Digital,
    Both,
}

impl MarketplaceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketplaceFormat::Physical => "Physical",
            MarketplaceFormat::Digital => "Digital",
            MarketplaceFormat::Both => "Both",
        }
    }
}

/// One storefront price entry. Both prices may be absent; the provider is
/// trusted to populate at least one for a usable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplacePrice {
    pub name: String,
    #[serde(rename = "priceIDR", default, skip_serializing_if = "Option::is_none")]
    pub price_idr: Option<String>,
    #[serde(rename = "priceUSD", default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<String>,
    pub link: String,
    pub format: MarketplaceFormat,
    #[serde(rename = "isInternational")]
    pub is_international: bool,
}

/// Where the manga picks up after a watched anime season. Constructed
/// fresh per lookup; a new result fully replaces any prior one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeContinuationResult {
    pub anime_title: String,
    pub next_chapter: String,
    pub next_volume: String,
    pub synopsis: String,
    pub volume_image_url: String,
    /// Provider-given order is preserved.
    pub marketplaces: Vec<MarketplacePrice>,
}
