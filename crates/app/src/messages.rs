//! Localized status and failure strings for the terminal front-end.
//!
//! The UI speaks English or Indonesian; Japanese is a translation
//! endpoint only and falls back to English here.

use shared::types::Language;

pub struct Messages {
    pub processing: &'static str,
    pub empty_input: &'static str,
    pub summarize_failed: &'static str,
    pub find_failed: &'static str,
    pub chat_fallback: &'static str,
    pub qa_hint: &'static str,
    pub qa_prompt: &'static str,
    pub summary_title: &'static str,
    pub highlights_title: &'static str,
    pub takeaways_title: &'static str,
    pub next_chapter_label: &'static str,
    pub next_volume_label: &'static str,
    pub synopsis_label: &'static str,
    pub cover_label: &'static str,
    pub marketplaces_label: &'static str,
    pub international_marker: &'static str,
}

static ENGLISH: Messages = Messages {
    processing: "Processing...",
    empty_input: "Nothing to do: the input is empty.",
    summarize_failed: "Failed to summarize text.",
    find_failed: "Failed to find info. Please try again.",
    chat_fallback: "Sorry, an error occurred.",
    qa_hint: "Ask something about this text (empty line to quit).",
    qa_prompt: "> ",
    summary_title: "Cohesive Summary",
    highlights_title: "Key Highlights",
    takeaways_title: "Takeaways",
    next_chapter_label: "Next chapter",
    next_volume_label: "Next volume",
    synopsis_label: "Synopsis",
    cover_label: "Cover",
    marketplaces_label: "Marketplaces",
    international_marker: "international",
};

static INDONESIAN: Messages = Messages {
    processing: "Sedang Memproses...",
    empty_input: "Tidak ada yang diproses: masukan kosong.",
    summarize_failed: "Gagal meringkas teks.",
    find_failed: "Gagal menemukan info. Coba lagi.",
    chat_fallback: "Maaf, terjadi kesalahan.",
    qa_hint: "Tanyakan sesuatu tentang teks ini (baris kosong untuk keluar).",
    qa_prompt: "> ",
    summary_title: "Ringkasan Padat",
    highlights_title: "Poin Penting",
    takeaways_title: "Kesimpulan",
    next_chapter_label: "Bab berikutnya",
    next_volume_label: "Volume berikutnya",
    synopsis_label: "Sinopsis",
    cover_label: "Sampul",
    marketplaces_label: "Marketplace",
    international_marker: "internasional",
};

impl Messages {
    pub fn for_language(lang: Language) -> &'static Messages {
        match lang {
            Language::Indonesian => &INDONESIAN,
            _ => &ENGLISH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indonesian_gets_its_own_table() {
        let messages = Messages::for_language(Language::Indonesian);
        assert_eq!(messages.summarize_failed, "Gagal meringkas teks.");
        assert_eq!(messages.chat_fallback, "Maaf, terjadi kesalahan.");
    }

    #[test]
    fn japanese_falls_back_to_english() {
        let messages = Messages::for_language(Language::Japanese);
        assert_eq!(messages.summarize_failed, "Failed to summarize text.");
    }
}
