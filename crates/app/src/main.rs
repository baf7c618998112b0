mod messages;
mod session;

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use anyhow::Result;
use assistant::Assistant;
use clap::{Parser, Subcommand};
use shared::settings::AppSettings;
use shared::types::{AnimeContinuationResult, Language, SummaryLength, SummaryResult};

use messages::Messages;
use session::SummarySession;

#[derive(Parser)]
#[command(
    name = "nexus",
    version,
    about = "Summaries, manga continuation lookups, and translation on the Gemini API"
)]
struct Cli {
    /// UI language for status and failure messages (en or id)
    #[arg(long, global = true, default_value = "en", value_parser = parse_language)]
    lang: Language,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a text, then answer questions about it
    Summarize {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        #[arg(long, default_value = "medium", value_parser = parse_length)]
        length: SummaryLength,

        /// Print the summary and exit without the Q&A loop
        #[arg(long)]
        no_chat: bool,
    },

    /// Translate text between English, Indonesian, and Japanese
    Translate {
        /// Text to translate; reads stdin when omitted
        text: Option<String>,

        #[arg(long = "from", default_value = "en", value_parser = parse_language)]
        source: Language,

        #[arg(long = "to", default_value = "id", value_parser = parse_language)]
        target: Language,
    },

    /// Find where the manga continues after an anime season
    Manga {
        /// Anime title to look up
        title: String,

        /// Last season watched
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        season: u32,

        /// Synopsis language; defaults to the UI language
        #[arg(long, value_parser = parse_language)]
        synopsis_lang: Option<Language>,
    },
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse()
}

fn parse_length(s: &str) -> Result<SummaryLength, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let settings = AppSettings {
        ui_language: cli.lang,
        ..AppSettings::default()
    };
    let assistant = Assistant::new(settings);
    let messages = Messages::for_language(cli.lang);

    match cli.command {
        Commands::Summarize {
            file,
            length,
            no_chat,
        } => run_summarize(&assistant, messages, cli.lang, file, length, no_chat).await,
        Commands::Translate {
            text,
            source,
            target,
        } => run_translate(&assistant, text, source, target).await,
        Commands::Manga {
            title,
            season,
            synopsis_lang,
        } => {
            run_manga(
                &assistant,
                messages,
                &title,
                season,
                synopsis_lang.unwrap_or(cli.lang),
            )
            .await
        }
    }
}

async fn run_summarize(
    assistant: &Assistant,
    messages: &Messages,
    lang: Language,
    file: Option<PathBuf>,
    length: SummaryLength,
    no_chat: bool,
) -> Result<()> {
    let text = read_input(file)?;
    if text.trim().is_empty() {
        println!("{}", messages.empty_input);
        return Ok(());
    }

    let mut session = SummarySession::new();
    println!("{}", messages.processing);
    match session.summarize(assistant, text, length, lang).await {
        Ok(result) => print_summary(result, messages),
        Err(err) => {
            tracing::error!(error = %err, "summarization failed");
            println!("{}", messages.summarize_failed);
            return Ok(());
        }
    }

    if no_chat {
        return Ok(());
    }

    println!();
    println!("{}", messages.qa_hint);
    let stdin = io::stdin();
    loop {
        print!("{}", messages.qa_prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() || question.eq_ignore_ascii_case("exit") {
            break;
        }
        let reply = session
            .send_message(assistant, question, lang, messages.chat_fallback)
            .await;
        println!("{}", reply);
    }
    Ok(())
}

async fn run_translate(
    assistant: &Assistant,
    text: Option<String>,
    source: Language,
    target: Language,
) -> Result<()> {
    let input = match text {
        Some(text) => text,
        None => read_input(None)?,
    };
    if input.trim().is_empty() {
        return Ok(());
    }

    match assistant.translate(&input, source, target).await {
        Ok(output) => println!("{}", output),
        // Output stays unchanged on failure; the trace is the only signal.
        Err(err) => tracing::warn!(error = %err, "translation failed"),
    }
    Ok(())
}

async fn run_manga(
    assistant: &Assistant,
    messages: &Messages,
    title: &str,
    season: u32,
    synopsis_lang: Language,
) -> Result<()> {
    if title.trim().is_empty() {
        println!("{}", messages.empty_input);
        return Ok(());
    }

    println!("{}", messages.processing);
    match assistant
        .locate_continuation(title, season, synopsis_lang)
        .await
    {
        Ok(result) => print_continuation(&result, messages),
        Err(err) => {
            tracing::error!(error = %err, "continuation lookup failed");
            println!("{}", messages.find_failed);
        }
    }
    Ok(())
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_summary(result: &SummaryResult, messages: &Messages) {
    println!();
    println!("## {}", messages.summary_title);
    println!("{}", result.summary);
    println!();
    println!("## {}", messages.highlights_title);
    for point in &result.bullet_points {
        println!("- {}", point);
    }
    println!();
    println!("## {}", messages.takeaways_title);
    for takeaway in &result.key_takeaways {
        println!("- {}", takeaway);
    }
}

fn print_continuation(result: &AnimeContinuationResult, messages: &Messages) {
    println!();
    println!("# {}", result.anime_title);
    println!("{}: {}", messages.next_chapter_label, result.next_chapter);
    println!("{}: {}", messages.next_volume_label, result.next_volume);
    println!();
    println!("## {}", messages.synopsis_label);
    println!("{}", result.synopsis);
    println!();
    println!("{}: {}", messages.cover_label, result.volume_image_url);
    println!();
    println!("## {}", messages.marketplaces_label);
    for marketplace in &result.marketplaces {
        let price = marketplace
            .price_idr
            .as_deref()
            .or(marketplace.price_usd.as_deref())
            .unwrap_or("-");
        let scope = if marketplace.is_international {
            format!(" [{}]", messages.international_marker)
        } else {
            String::new()
        };
        println!(
            "- {} ({}){}: {} - {}",
            marketplace.name,
            marketplace.format.as_str(),
            scope,
            price,
            marketplace.link
        );
    }
}
