use anyhow::Result;
use rig::client::{CompletionClient, Nothing};
use rig::completion::Prompt;
use rig::providers::ollama;

/// Instructs the model to write a short Thai-language news summary.
const PREAMBLE: &str = "You are a news summarization assistant. \
    Summarize the article the user provides in Thai, in 3 to 5 short lines. \
    Keep only the key facts: who, what, when, where and why. \
    Do not add opinions or information that is not in the article.";

/// Creates an Ollama client connected to the local instance.
pub fn create_client() -> Result<ollama::Client<reqwest::Client>> {
    let client: ollama::Client<reqwest::Client> = ollama::Client::new(Nothing)?;
    Ok(client)
}

/// Cuts `text` to at most `max_chars` characters without splitting a
/// multi-byte character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds the user prompt from the article title and (already truncated) body.
pub fn build_prompt(title: &str, body: &str) -> String {
    format!("Title: {}\n\nArticle:\n{}", title, body)
}

/// Asks the language model for a summary of the article.
///
/// Only the first `max_chars` characters of `body` are sent.
pub async fn summarize_article(
    model_name: &str,
    title: &str,
    body: &str,
    max_chars: usize,
) -> Result<String> {
    let client = create_client()?;

    let body = truncate_chars(body, max_chars);
    let prompt = build_prompt(title, body);
    tracing::debug!(
        "prompting model '{}' with {} characters of article text",
        model_name,
        body.chars().count()
    );

    let agent = client.agent(model_name).preamble(PREAMBLE).build();

    let response = agent.prompt(prompt.as_str()).await?;
    Ok(response.trim().to_string())
}
