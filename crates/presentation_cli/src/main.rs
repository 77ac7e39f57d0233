//! Doc2Podcast CLI
//!
//! Command-line client for a running Doc2Podcast server.

#![allow(clippy::print_stdout)]

mod client;

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Parser, Subcommand};
use client::{ApiClient, SummarizeOptions, SummaryResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Doc2Podcast CLI
#[derive(Debug, Parser)]
#[command(name = "doc2podcast-cli")]
#[command(author, version, about = "Summarize documents and turn them into audio", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Server URL
    #[arg(short, long, global = true, env = "DOC2PODCAST_URL", default_value = "http://localhost:5000")]
    url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "300")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Upload a document and print its summary
    ///
    /// Example: doc2podcast-cli summarize report.pdf --mode deep --language fr
    Summarize {
        /// Document to upload (pdf, txt, md, html, htm, csv, docx, pptx)
        file: PathBuf,

        /// quick, standard or deep
        #[arg(short, long, default_value = "standard")]
        mode: String,

        /// Target language of the translated summary
        #[arg(short, long, default_value = "en")]
        language: String,

        /// standard or gemini
        #[arg(long, default_value = "standard")]
        model_type: String,

        /// Also synthesize the translated summary and save it here
        #[arg(long)]
        audio: Option<PathBuf>,

        /// Voice used with --audio
        #[arg(long, default_value = "standard")]
        voice: String,
    },

    /// Synthesize text to an audio file
    Audio {
        /// Text to speak
        text: String,

        /// Language of the text
        #[arg(short, long)]
        language: String,

        /// standard or a named voice (see `voices`)
        #[arg(long, default_value = "standard")]
        voice: String,

        /// Save the artifact here instead of only printing its URL
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available voices
    Voices,

    /// List available target languages
    Languages,

    /// Check server readiness (exit code 1 when not ready)
    Health,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn print_summary(result: &SummaryResult) {
    let metrics = &result.metrics;
    println!("📝 Summary:\n{}", result.original_summary);
    if result.translated_summary != result.original_summary {
        println!("\n🌍 Translated:\n{}", result.translated_summary);
    }
    println!(
        "\n⏱️  {:.2}s total (extraction {:.2}s, summarization {:.2}s, translation {:.2}s)",
        metrics.total_time,
        metrics.extraction_time,
        metrics.summarization_time,
        metrics.translation_time
    );
}

async fn save_audio(
    client: &ApiClient,
    text: &str,
    language: &str,
    voice: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let audio_url = client.generate_audio(text, language, Some(voice)).await?;
    println!("🔊 Audio: {}", client.url(&audio_url));

    if let Some(output) = output {
        let bytes = client.download(&audio_url).await?;
        tokio::fs::write(&output, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("💾 Saved {} bytes to {}", bytes.len(), output.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = ApiClient::new(&cli.url, Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Commands::Summarize {
            file,
            mode,
            language,
            model_type,
            audio,
            voice,
        } => {
            println!("📄 Summarizing {}...", file.display());
            let options = SummarizeOptions {
                mode,
                language,
                model_type,
            };
            let result = client.summarize(&file, &options).await?;
            print_summary(&result);

            if audio.is_some() {
                save_audio(
                    &client,
                    &result.translated_summary,
                    &options.language,
                    &voice,
                    audio,
                )
                .await?;
            }
        },

        Commands::Audio {
            text,
            language,
            voice,
            output,
        } => save_audio(&client, &text, &language, &voice, output).await?,

        Commands::Voices => {
            let resp = client.get_json("/api/voices").await?;
            println!("🗣️  Available Voices:");
            println!("{}", serde_json::to_string_pretty(&resp)?);
        },

        Commands::Languages => {
            let resp = client.get_json("/api/languages").await?;
            println!("🌍 Available Languages:");
            println!("{}", serde_json::to_string_pretty(&resp)?);
        },

        Commands::Health => match client.get_json("/ready").await {
            Ok(_) => println!("✅ Ready"),
            Err(e) => {
                println!("❌ Not ready: {e}");
                std::process::exit(1);
            },
        },
    }

    Ok(())
}
