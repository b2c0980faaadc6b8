use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use news_digest::{server, Backend, Config, Summarizer};

/// News Digest — summarize news articles from the command line or the browser.
///
/// Runs locally. The extractive backend needs no network beyond the article
/// itself; the LLM backend talks to a local Ollama instance.
#[derive(Parser)]
#[command(name = "news_digest")]
#[command(version = "0.1.0")]
#[command(about = "Fetch a news article and produce a short summary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web form and the JSON API
    Serve {
        /// Port to listen on (defaults to NEWS_DIGEST_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Summarize the article at a URL
    ///
    /// Fetches the page, extracts its title and body text,
    /// and prints the summary.
    Url {
        /// Article URL
        #[arg(value_name = "URL")]
        url: String,

        /// Summarization backend
        #[arg(short, long, value_enum)]
        backend: Option<Backend>,

        /// Maximum sentences in an extractive summary
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        max_sentences: Option<u64>,
    },

    /// Summarize plain text from a file, or stdin when no file is given
    Text {
        /// Path to a text file
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Summarization backend
        #[arg(short, long, value_enum)]
        backend: Option<Backend>,

        /// Maximum sentences in an extractive summary
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        max_sentences: Option<u64>,
    },
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let summarizer = Summarizer::new(config)?;

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or(summarizer.config().port);
            server::start_server(Arc::new(summarizer), port).await
        }
        Commands::Url {
            url,
            backend,
            max_sentences,
        } => {
            let mut options = summarizer.default_options();
            if let Some(backend) = backend {
                options.backend = backend;
            }
            if let Some(n) = max_sentences {
                options.max_sentences = n as usize;
            }

            let result = summarizer.summarize_url(&url, options).await?;
            println!("\n{}\n", "=".repeat(60));
            println!("{}\n", result.title);
            println!("{}", result.summary);
            println!("\n{}", "=".repeat(60));
            Ok(())
        }
        Commands::Text {
            file,
            backend,
            max_sentences,
        } => {
            let text = read_input(file.as_deref())?;
            let mut options = summarizer.default_options();
            if let Some(backend) = backend {
                options.backend = backend;
            }
            if let Some(n) = max_sentences {
                options.max_sentences = n as usize;
            }

            let title = file.as_deref().unwrap_or("stdin");
            let summary = summarizer.summarize_text(title, &text, options).await?;
            println!("{}", summary);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("news_digest=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(e) = run(cli, config).await {
        eprintln!("\nError: {:#}", e);
        std::process::exit(1);
    }
}
