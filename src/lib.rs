//! News Digest: fetch a news article and summarize it, either with a local
//! word-frequency heuristic or by delegating to a language model.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod llm;
pub mod pipeline;
pub mod server;
pub mod summarizer;
pub mod tokenizer;

pub use config::Config;
pub use error::SummarizeError;
pub use pipeline::{ArticleSummary, Backend, Summarizer, SummaryOptions};
pub use summarizer::summarize;
