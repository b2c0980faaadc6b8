/// Word and sentence tokenization for extractive scoring.
///
/// Words are maximal runs of ASCII word characters (letters, digits and
/// underscore), lowercased. Sentences are the pieces between runs of
/// `.`, `!` and `?`. Neither step knows anything about non-Latin scripts:
/// Thai text, for example, produces no word tokens at all.

/// Returns true for characters that may appear inside a word token.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    words(text).map(|w| w.to_ascii_lowercase()).collect()
}

/// Iterate over the raw word runs of `text` without allocating.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
}

/// Split text on runs of sentence-terminal punctuation.
///
/// Pieces are trimmed; empty pieces between consecutive terminators are
/// dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
