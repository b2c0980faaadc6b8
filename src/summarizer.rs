/// Extractive summarization by word frequency with a lead-sentence boost.
///
/// Every sentence is scored by summing the document-wide frequency of its
/// words (only words longer than three characters are counted), the first
/// three sentences get a 1.5x boost, and the best `max_sentences` are
/// returned in document order.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::tokenizer;

/// Sentence budget used when the caller does not pick one.
pub const DEFAULT_MAX_SENTENCES: usize = 4;

/// Sentences must be strictly longer than this (in characters) to be kept.
const MIN_SENTENCE_CHARS: usize = 20;

/// Words must be strictly longer than this to enter the frequency table.
const MIN_WORD_CHARS: usize = 3;

/// Number of leading sentences that receive the positional boost.
const LEAD_SENTENCES: usize = 3;

const LEAD_BOOST: f64 = 1.5;

#[derive(Debug)]
struct ScoredSentence<'a> {
    text: &'a str,
    score: f64,
    index: usize,
}

/// Summarize already-cleaned article text into at most `max_sentences`
/// sentences.
///
/// Never fails. When no sentence survives the length filter the result is
/// just `"."`; use [`is_degenerate`] to detect that. A budget of zero is
/// treated as one.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let max_sentences = max_sentences.max(1);
    let cleaned = tokenizer::normalize_whitespace(text);
    let sentences = candidate_sentences(&cleaned);

    if sentences.len() <= max_sentences {
        return join_sentences(sentences.into_iter());
    }

    let freq = word_frequencies(&cleaned);

    let mut scored: Vec<ScoredSentence> = sentences
        .into_iter()
        .enumerate()
        .map(|(index, text)| ScoredSentence {
            text,
            score: score_sentence(text, index, &freq),
            index,
        })
        .collect();

    // Two stable passes: rank by score, then restore document order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(max_sentences);
    scored.sort_by_key(|s| s.index);

    join_sentences(scored.into_iter().map(|s| s.text))
}

/// Returns true when a summary carries no sentence content, e.g. the `"."`
/// produced for input made only of short fragments.
pub fn is_degenerate(summary: &str) -> bool {
    summary.trim().trim_end_matches('.').trim().is_empty()
}

/// Split into sentences and drop fragments of 20 characters or fewer.
fn candidate_sentences(text: &str) -> Vec<&str> {
    tokenizer::split_sentences(text)
        .into_iter()
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

/// Count every word longer than three characters across the document.
fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    for word in tokenizer::tokenize(text) {
        if word.len() > MIN_WORD_CHARS {
            *freq.entry(word).or_insert(0) += 1;
        }
    }
    freq
}

fn score_sentence(sentence: &str, index: usize, freq: &HashMap<String, usize>) -> f64 {
    let raw: usize = tokenizer::tokenize(sentence)
        .iter()
        .filter_map(|word| freq.get(word))
        .sum();

    let score = raw as f64;
    if index < LEAD_SENTENCES {
        score * LEAD_BOOST
    } else {
        score
    }
}

fn join_sentences<'a>(sentences: impl Iterator<Item = &'a str>) -> String {
    let mut summary = sentences.collect::<Vec<_>>().join(" ");
    summary.push('.');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Indices of the source sentences that made it into the summary.
    fn picked(text: &str, summary: &str) -> Vec<usize> {
        let cleaned = tokenizer::normalize_whitespace(text);
        candidate_sentences(&cleaned)
            .iter()
            .enumerate()
            .filter(|(_, s)| summary.contains(*s))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_short_text_returned_whole() {
        let text = "Alpha bravo charlie delta echo. Foxtrot golf hotel india juliet! \
                    Kilo lima mike november oscar?";
        let summary = summarize(text, 4);
        assert_eq!(
            summary,
            "Alpha bravo charlie delta echo Foxtrot golf hotel india juliet \
             Kilo lima mike november oscar."
        );
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let text = "  Alpha   bravo\n\ncharlie delta echo.\t\tFoxtrot golf hotel india juliet.  ";
        let summary = summarize(text, 4);
        assert_eq!(
            summary,
            "Alpha bravo charlie delta echo Foxtrot golf hotel india juliet."
        );
    }

    #[test]
    fn test_fragments_only_is_degenerate() {
        let summary = summarize("Short one. Tiny. Also brief! Nope?", 4);
        assert_eq!(summary, ".");
        assert!(is_degenerate(&summary));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize("", 4), ".");
    }

    #[test]
    fn test_fragments_never_appear() {
        let text = "Breaking news. The council approved the new transit budget today. \
                    Photo: file. Residents will see more buses running on weekends. \
                    Read more. Critics argue the budget ignores rural communities entirely.";
        let summary = summarize(text, 2);
        assert!(!summary.contains("Breaking news"));
        assert!(!summary.contains("Photo"));
        assert!(!summary.contains("Read more"));
        assert_eq!(picked(text, &summary).len(), 2);
    }

    #[test]
    fn test_exact_count_and_document_order() {
        let text = "Markets opened higher on Monday morning in Bangkok. \
                    Energy stocks climbed as crude prices rebounded sharply. \
                    Analysts expect energy stocks to lead the energy sector rally. \
                    The weather was mild across the northern provinces. \
                    Energy regulators will review energy stocks and energy prices. \
                    A local football club announced a new coach yesterday.";
        let summary = summarize(text, 2);
        let indices = picked(text, &summary);
        assert_eq!(indices.len(), 2);

        let cleaned = tokenizer::normalize_whitespace(text);
        let sentences = candidate_sentences(&cleaned);
        let first = summary.find(sentences[indices[0]]).unwrap();
        let second = summary.find(sentences[indices[1]]).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_highest_scores_selected() {
        let text = "Markets opened higher on Monday morning in Bangkok. \
                    Energy stocks climbed as crude prices rebounded sharply. \
                    Analysts expect energy stocks to lead the energy sector rally. \
                    The weather was mild across the northern provinces. \
                    Energy regulators will review energy stocks and energy prices. \
                    A local football club announced a new coach yesterday.";
        let summary = summarize(text, 2);
        assert_eq!(
            summary,
            "Analysts expect energy stocks to lead the energy sector rally \
             Energy regulators will review energy stocks and energy prices."
        );
    }

    #[test]
    fn test_lead_boost_breaks_equal_scores() {
        // Every sentence has the same raw score; the boost decides.
        let text = "Kangaroo wombat platypus echidna. \
                    Kangaroo wombat platypus echidna!! \
                    Kangaroo wombat platypus echidna?? \
                    Kangaroo wombat platypus echidna... \
                    Kangaroo wombat platypus echidna.";
        let summary = summarize(text, 1);
        assert_eq!(summary, "Kangaroo wombat platypus echidna.");

        // A slightly better raw score later on still loses to a lead sentence.
        let text = "Zebra quokka mongoose ocelot jackal. \
                    Filler words here and some more. \
                    Other filler words here again. \
                    Zebra quokka mongoose ocelot jackal mostly. \
                    Something entirely different now.";
        let summary = summarize(text, 1);
        assert_eq!(summary, "Zebra quokka mongoose ocelot jackal.");
    }

    #[test]
    fn test_later_sentence_wins_when_clearly_better() {
        let text = "Opening remarks were brief and polite. \
                    Second paragraph says very little. \
                    Third paragraph also says little. \
                    Flood flood flood flood flood flood warnings issued. \
                    Another flood report arrived late tonight.";
        let summary = summarize(text, 1);
        assert_eq!(summary, "Flood flood flood flood flood flood warnings issued.");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let text = "Markets opened higher on Monday morning in Bangkok. \
                    Energy stocks climbed as crude prices rebounded sharply. \
                    Analysts expect energy stocks to lead the energy sector rally. \
                    The weather was mild across the northern provinces. \
                    Energy regulators will review energy stocks and energy prices.";
        let first = summarize(text, 3);
        let second = summarize(&first, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_deterministic() {
        let text = "One sentence that is long enough to keep. \
                    Two sentence that is long enough to keep. \
                    Three sentence that is long enough to keep. \
                    Four sentence that is long enough to keep. \
                    Five sentence that is long enough to keep.";
        let a = summarize(text, 2);
        let b = summarize(text, 2);
        assert_eq!(a, b);
        assert_eq!(picked(text, &a).len(), 2);
    }

    #[test]
    fn test_zero_budget_treated_as_one() {
        let text = "Only one sentence here that is long enough. \
                    And another sentence that is long enough.";
        let summary = summarize(text, 0);
        assert_eq!(summary, "Only one sentence here that is long enough.");
    }

    #[test]
    fn test_word_frequencies_skip_short_words() {
        let freq = word_frequencies("The cat and the Dogs, dogs DOGS run");
        assert_eq!(freq.get("dogs"), Some(&3));
        assert!(freq.get("the").is_none());
        assert!(freq.get("cat").is_none());
    }

    #[test]
    fn test_is_degenerate() {
        assert!(is_degenerate("."));
        assert!(is_degenerate(""));
        assert!(is_degenerate("  .. "));
        assert!(!is_degenerate("A real sentence that says something."));
    }
}
