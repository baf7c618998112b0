//! Instruction strings for each operation.
//!
//! Builders are deterministic: same inputs, same instruction. The JSON
//! shape sketches embedded here mirror the schemas declared on the
//! request; the backend gets both the human-readable sketch and the
//! machine-enforced declaration.

use shared::types::{Language, SummaryLength};

/// Response-localization directive. Exactly one of the two variants is
/// embedded per prompt, never both.
pub fn response_language_directive(lang: Language) -> &'static str {
    match lang {
        Language::Indonesian => "Tolong berikan respon dalam Bahasa Indonesia.",
        _ => "Please provide the response in English.",
    }
}

pub fn summarize_prompt(text: &str, length: SummaryLength, lang: Language) -> String {
    format!(
        r#"Summarize the following text in a {length} manner. {directive}
Text: {text}

Provide the response in the following JSON format:
{{
  "summary": "A cohesive paragraph of the summary",
  "bulletPoints": ["point 1", "point 2", ...],
  "keyTakeaways": ["takeaway 1", "takeaway 2", ...]
}}"#,
        length = length.token(),
        directive = response_language_directive(lang),
        text = text,
    )
}

pub fn translate_prompt(text: &str, source: Language, target: Language) -> String {
    format!(
        "Translate the following text from {} to {}. Preserve the original meaning and tone.\nText: {}",
        source.display_name(),
        target.display_name(),
        text,
    )
}

/// Persona instruction grounding the Q&A follow-up in the source text and
/// the summary that was shown to the user.
pub fn chat_system_instruction(original_text: &str, summary: &str, lang: Language) -> String {
    let respond_in = match lang {
        Language::Indonesian => "Bahasa Indonesia",
        _ => "English",
    };
    format!(
        r#"You are a helpful assistant. You have access to a text and its summary.
Original Text: {original}
Summary Provided to User: {summary}
Respond in {respond_in}.
Be concise and base your answers on the provided text."#,
        original = original_text,
        summary = summary,
        respond_in = respond_in,
    )
}

pub fn continuation_prompt(title: &str, last_season_watched: u32, lang: Language) -> String {
    format!(
        r#"Find the manga continuation for the anime "{title}" Season {season}.
Please provide the synopsis specifically in {synopsis_lang}.

You MUST search for:
1. The EXACT chapter number where the manga continues after the anime season ends.
2. The Volume number containing that chapter.
3. A high-quality synopsis of the arc that follows (Spoiler-Free).
4. A direct URL to a High-Definition (HD) official manga volume cover image.
5. Price comparisons for Indonesian marketplaces (Tokopedia, Shopee, Gramedia) and International (Amazon, BookWalker).

Format the result in this JSON structure:
{{
  "animeTitle": "{title}",
  "nextChapter": "Chapter X (Name of chapter)",
  "nextVolume": "Volume Y",
  "synopsis": "A detailed but spoiler-free summary...",
  "volumeImageUrl": "https://direct-link-to-hd-image.jpg",
  "marketplaces": [
    {{
      "name": "Tokopedia",
      "priceIDR": "Rp 45.000",
      "link": "https://...",
      "format": "Physical",
      "isInternational": false
    }},
    ...
  ]
}}"#,
        title = title,
        season = last_season_watched,
        synopsis_lang = lang.display_name(),
    )
}
