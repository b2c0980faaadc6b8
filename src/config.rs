use std::str::FromStr;

use crate::pipeline::Backend;
use crate::summarizer::DEFAULT_MAX_SENTENCES;

/// Runtime settings, read from the environment (and `.env`) with defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for `serve`.
    pub port: u16,
    /// Backend used when a request does not name one.
    pub backend: Backend,
    /// Sentence budget for the extractive backend.
    pub max_sentences: usize,
    /// Upper bound on a single page fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Model name passed to the LLM backend.
    pub completion_model: String,
    /// Body characters sent to the LLM backend.
    pub llm_input_chars: usize,
    /// Pages whose extracted text is shorter than this are rejected.
    pub min_content_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            backend: Backend::Extractive,
            max_sentences: DEFAULT_MAX_SENTENCES,
            fetch_timeout_secs: 30,
            completion_model: "llama3.2".to_string(),
            llm_input_chars: 4000,
            min_content_chars: 100,
        }
    }
}

impl Config {
    /// Builds the config from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            port: env_or("NEWS_DIGEST_PORT", defaults.port),
            backend: env_or("SUMMARY_BACKEND", defaults.backend),
            max_sentences: env_or("MAX_SENTENCES", defaults.max_sentences).max(1),
            fetch_timeout_secs: env_or("FETCH_TIMEOUT_SECS", defaults.fetch_timeout_secs),
            completion_model: std::env::var("COMPLETION_MODEL")
                .unwrap_or(defaults.completion_model),
            llm_input_chars: env_or("LLM_INPUT_CHARS", defaults.llm_input_chars),
            min_content_chars: env_or("MIN_CONTENT_CHARS", defaults.min_content_chars),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("ignoring invalid value for {}: {:?}", key, raw);
            default
        }
    }
}
