use thiserror::Error;

/// Everything that can go wrong between receiving a URL and returning a
/// summary. The `Display` text is safe to show to end users; upstream
/// details are logged where the error is created and never carried here.
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Please provide the URL of a news article")]
    MissingUrl,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Could not access the given URL")]
    Fetch,

    #[error("Could not extract enough content from the page ({0} characters)")]
    InsufficientContent(usize),

    #[error("Could not generate a summary, please try again")]
    EmptySummary,

    #[error("The language model could not summarize this article")]
    Llm,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl SummarizeError {
    /// HTTP status code for this error: caller mistakes and unusable source
    /// pages are 400, failures on our side are 500.
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizeError::MissingUrl
            | SummarizeError::InvalidRequest(_)
            | SummarizeError::InvalidUrl
            | SummarizeError::Fetch
            | SummarizeError::InsufficientContent(_) => 400,
            SummarizeError::EmptySummary
            | SummarizeError::Llm
            | SummarizeError::Internal(_) => 500,
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        tracing::warn!("fetch failed: {}", err);
        SummarizeError::Fetch
    }
}
