//! Manga continuation lookup for a watched anime season.

use anyhow::Result;
use providers::schema::ResponseSchema;
use providers::tasks::{profile, Task};
use providers::GenerateRequest;
use shared::types::{AnimeContinuationResult, Language};

use crate::{parse, prompts, Assistant};

/// Nested declared shape. Prices stay optional per marketplace; the
/// boolean `isInternational` and the link are not.
pub fn continuation_schema() -> ResponseSchema {
    let marketplace = ResponseSchema::object(
        vec![
            ("name", ResponseSchema::String),
            ("priceIDR", ResponseSchema::String),
            ("priceUSD", ResponseSchema::String),
            ("link", ResponseSchema::String),
            ("format", ResponseSchema::String),
            ("isInternational", ResponseSchema::Boolean),
        ],
        &["name", "link", "format", "isInternational"],
    );

    ResponseSchema::object(
        vec![
            ("animeTitle", ResponseSchema::String),
            ("nextChapter", ResponseSchema::String),
            ("nextVolume", ResponseSchema::String),
            ("synopsis", ResponseSchema::String),
            ("volumeImageUrl", ResponseSchema::String),
            ("marketplaces", ResponseSchema::array(marketplace)),
        ],
        &[
            "animeTitle",
            "nextChapter",
            "nextVolume",
            "synopsis",
            "volumeImageUrl",
            "marketplaces",
        ],
    )
}

impl Assistant {
    /// Find where the manga picks up after `last_season_watched` of
    /// `title`, with the synopsis localized to `lang`.
    ///
    /// Runs on the search-capable model with grounding enabled; the
    /// backend may consult external sources before answering. Marketplace
    /// order in the result is the provider's order.
    pub async fn locate_continuation(
        &self,
        title: &str,
        last_season_watched: u32,
        lang: Language,
    ) -> Result<AnimeContinuationResult> {
        let profile = profile(Task::Continuation, &self.settings().model);
        let request = GenerateRequest::prompt(
            profile.model,
            prompts::continuation_prompt(title, last_season_watched, lang),
        )
        .with_schema(continuation_schema())
        .with_google_search(profile.google_search);

        let raw = self.dispatch(request).await?;
        parse::decode_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeModel;
    use shared::settings::AppSettings;
    use std::sync::Arc;

    const PAYLOAD: &str = r#"{
        "animeTitle": "Attack on Titan",
        "nextChapter": "Chapter 91 (The Other Side of the Sea)",
        "nextVolume": "Volume 23",
        "synopsis": "Ceritanya berlanjut di seberang lautan.",
        "volumeImageUrl": "https://example.com/aot-23.jpg",
        "marketplaces": [
            {"name": "Gramedia", "priceIDR": "Rp 60.000", "link": "https://g", "format": "Physical", "isInternational": false},
            {"name": "BookWalker", "priceUSD": "$8.99", "link": "https://b", "format": "Digital", "isInternational": true}
        ]
    }"#;

    #[tokio::test]
    async fn dispatches_grounded_on_the_pro_model() {
        let fake = Arc::new(FakeModel::replying(PAYLOAD));
        let assistant = Assistant::with_client(AppSettings::default(), fake.clone());

        let result = assistant
            .locate_continuation("Attack on Titan", 1, Language::Indonesian)
            .await
            .unwrap();

        let request = fake.request(0);
        assert_eq!(request.model, AppSettings::default().model.pro_model);
        assert!(request.google_search);
        assert!(request.response_schema.is_some());
        assert!(request.contents[0]
            .text
            .contains("synopsis specifically in Indonesian"));

        let names: Vec<&str> = result.marketplaces.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Gramedia", "BookWalker"]);
        assert!(!result.marketplaces[0].is_international);
        assert!(result.marketplaces[1].is_international);
    }

    #[tokio::test]
    async fn nonconforming_payload_fails() {
        let fake = Arc::new(FakeModel::replying(
            r#"{"animeTitle": "AoT", "marketplaces": []}"#,
        ));
        let assistant = Assistant::with_client(AppSettings::default(), fake);

        let result = assistant
            .locate_continuation("AoT", 4, Language::English)
            .await;
        assert!(result.is_err());
    }
}
