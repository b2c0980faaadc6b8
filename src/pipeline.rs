use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::Config;
use crate::error::SummarizeError;
use crate::extract;
use crate::fetch::{self, Fetcher};
use crate::llm;
use crate::summarizer;
use crate::tokenizer;

/// Which summarization path to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Local word-frequency heuristic.
    Extractive,
    /// Delegate to the configured language model.
    Llm,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extractive" => Ok(Backend::Extractive),
            "llm" => Ok(Backend::Llm),
            other => Err(format!("unknown summary backend '{}'", other)),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Extractive => write!(f, "extractive"),
            Backend::Llm => write!(f, "llm"),
        }
    }
}

/// Per-request knobs; anything left unset comes from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub backend: Backend,
    pub max_sentences: usize,
}

/// A finished summary together with the source page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub title: String,
    pub summary: String,
}

/// Fetch → extract → summarize, with the shared HTTP client and settings.
#[derive(Debug, Clone)]
pub struct Summarizer {
    fetcher: Fetcher,
    config: Config,
}

impl Summarizer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let fetcher = Fetcher::new(config.fetch_timeout_secs)?;
        Ok(Summarizer { fetcher, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Options taken straight from the config.
    pub fn default_options(&self) -> SummaryOptions {
        SummaryOptions {
            backend: self.config.backend,
            max_sentences: self.config.max_sentences,
        }
    }

    /// Summarizes the article at `raw_url`.
    ///
    /// Pipeline: Validate URL → Fetch HTML → Extract title/body → Check
    /// length → Summarize → Reject empty output.
    pub async fn summarize_url(
        &self,
        raw_url: &str,
        options: SummaryOptions,
    ) -> Result<ArticleSummary, SummarizeError> {
        let url = fetch::parse_url(raw_url)?;
        let html = self.fetcher.fetch_html(&url).await?;

        let article = extract::extract_article(&html);
        let body_chars = article.body.chars().count();
        tracing::info!(
            "extracted {} characters from {} (title: {:?})",
            body_chars,
            url,
            article.title
        );

        if body_chars < self.config.min_content_chars {
            return Err(SummarizeError::InsufficientContent(body_chars));
        }

        let summary = self
            .summarize_text(&article.title, &article.body, options)
            .await?;

        Ok(ArticleSummary {
            title: article.title,
            summary,
        })
    }

    /// Runs the selected backend over text that is already extracted.
    pub async fn summarize_text(
        &self,
        title: &str,
        text: &str,
        options: SummaryOptions,
    ) -> Result<String, SummarizeError> {
        let summary = match options.backend {
            Backend::Extractive => {
                let text = tokenizer::normalize_whitespace(text);
                summarizer::summarize(&text, options.max_sentences)
            }
            Backend::Llm => llm::summarize_article(
                &self.config.completion_model,
                title,
                text,
                self.config.llm_input_chars,
            )
            .await
            .map_err(|e| {
                tracing::error!("LLM summarization failed: {:#}", e);
                SummarizeError::Llm
            })?,
        };

        if summarizer::is_degenerate(&summary) {
            tracing::warn!("{} backend produced an empty summary", options.backend);
            return Err(SummarizeError::EmptySummary);
        }

        Ok(summary)
    }
}
