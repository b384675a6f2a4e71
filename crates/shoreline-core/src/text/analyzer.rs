//! Built-in lexicon polarity analyzer
//!
//! Polarity is the mean score of the sentiment words found, after applying
//! the modifiers directly in front of each word:
//! - Negation ("not", "no", "never", "*n't") flips the score and halves it
//! - Intensifiers ("very", "extremely", ...) multiply it
//!
//! Noun phrases are maximal runs of two or more content words (alphabetic,
//! not a stopword, modifier, sentiment word or past-tense verb). Punctuation
//! ends a run and clears pending modifiers.

use unicode_segmentation::UnicodeSegmentation;

use super::{PolarityAnalyzer, PolarityReading};
use crate::error::AnalysisError;

const SENTIMENT_WORDS: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("safe", 0.5),
    ("calm", 0.3),
    ("clear", 0.1),
    ("fine", 0.4),
    ("stable", 0.3),
    ("secure", 0.4),
    ("relief", 0.4),
    ("helpful", 0.5),
    ("rescued", 0.4),
    ("restored", 0.4),
    ("recovered", 0.3),
    ("improving", 0.4),
    ("thankful", 0.6),
    ("grateful", 0.6),
    ("excellent", 1.0),
    ("best", 1.0),
    ("happy", 0.8),
    ("lucky", 0.3),
    // negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("worst", -1.0),
    ("dangerous", -0.6),
    ("deadly", -0.8),
    ("severe", -0.5),
    ("heavy", -0.2),
    ("serious", -0.3),
    ("critical", -0.4),
    ("destroyed", -0.7),
    ("damaged", -0.5),
    ("flooded", -0.4),
    ("stranded", -0.5),
    ("trapped", -0.6),
    ("missing", -0.4),
    ("injured", -0.6),
    ("dead", -0.8),
    ("panic", -0.6),
    ("scared", -0.6),
    ("afraid", -0.6),
    ("worried", -0.4),
    ("worse", -0.5),
    ("poor", -0.4),
    ("fake", -0.5),
    ("false", -0.35),
    ("misleading", -0.5),
    ("sad", -0.5),
    ("unsafe", -0.5),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "nor", "without", "hardly"];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("highly", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("quite", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("barely", 0.4),
];

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "than", "of", "in", "on", "at", "to",
    "from", "by", "for", "with", "into", "onto", "near", "over", "under", "about", "after",
    "before", "around", "across", "along", "is", "are", "was", "were", "be", "been", "being",
    "am", "has", "have", "had", "do", "does", "did", "will", "would", "can", "could", "should",
    "may", "might", "must", "shall", "this", "that", "these", "those", "it", "its", "i", "we",
    "you", "he", "she", "they", "them", "us", "our", "your", "their", "my", "me", "his", "her",
    "there", "here", "what", "which", "who", "whom", "when", "where", "why", "how", "all",
    "any", "some", "many", "much", "more", "most", "other", "such", "only", "just", "also",
    "now", "still", "yet", "again", "as", "up", "down", "out", "off", "please", "alert",
];

/// Lexicon-based implementation of [`PolarityAnalyzer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TokenKind {
    Sentiment(f64),
    Negation,
    Intensifier(f64),
    Content,
    Other,
}

fn classify(word: &str) -> TokenKind {
    if let Some((_, score)) = SENTIMENT_WORDS.iter().find(|(w, _)| *w == word) {
        return TokenKind::Sentiment(*score);
    }
    if NEGATIONS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t") {
        return TokenKind::Negation;
    }
    if let Some((_, factor)) = INTENSIFIERS.iter().find(|(w, _)| *w == word) {
        return TokenKind::Intensifier(*factor);
    }
    if STOPWORDS.contains(&word) {
        return TokenKind::Other;
    }
    let alphabetic = word.chars().all(|c| c.is_alphabetic() || c == '-' || c == '_');
    let past_tense = word.len() > 4 && word.ends_with("ed");
    if alphabetic && word.chars().count() > 1 && !past_tense {
        TokenKind::Content
    } else {
        TokenKind::Other
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<PolarityReading, AnalysisError> {
        if text.contains('\u{FFFD}') {
            return Err(AnalysisError::Nlp(
                "text contains undecodable characters (U+FFFD)".to_string(),
            ));
        }

        let mut scores = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0;

        let mut noun_phrases = Vec::new();
        let mut run: Vec<&str> = Vec::new();

        for word in text.split_word_bounds() {
            if word.chars().all(char::is_whitespace) {
                continue;
            }
            if !word.chars().any(char::is_alphanumeric) {
                // punctuation ends phrases and modifier scope
                flush_phrase(&mut run, &mut noun_phrases);
                negated = false;
                intensity = 1.0;
                continue;
            }

            let lower = word.to_lowercase();
            let kind = classify(&lower);

            match kind {
                TokenKind::Sentiment(score) => {
                    let mut score = score * intensity;
                    if negated {
                        score *= -0.5;
                    }
                    scores.push(score);
                    negated = false;
                    intensity = 1.0;
                }
                TokenKind::Negation => negated = true,
                TokenKind::Intensifier(factor) => intensity *= factor,
                TokenKind::Content | TokenKind::Other => {
                    negated = false;
                    intensity = 1.0;
                }
            }

            if kind == TokenKind::Content {
                run.push(word);
            } else {
                flush_phrase(&mut run, &mut noun_phrases);
            }
        }
        flush_phrase(&mut run, &mut noun_phrases);

        let polarity = if scores.is_empty() {
            0.0
        } else {
            (scores.iter().sum::<f64>() / scores.len() as f64).clamp(-1.0, 1.0)
        };

        Ok(PolarityReading {
            polarity,
            noun_phrases,
        })
    }
}

fn flush_phrase(run: &mut Vec<&str>, phrases: &mut Vec<String>) {
    if run.len() >= 2 {
        phrases.push(run.join(" "));
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> PolarityReading {
        LexiconAnalyzer::new().analyze(text).unwrap()
    }

    #[test]
    fn neutral_without_sentiment_words() {
        let r = analyze("Water level at the pier");
        assert_eq!(r.polarity, 0.0);
    }

    #[test]
    fn negative_report() {
        let r = analyze("Terrible flooding, houses destroyed");
        assert!(r.polarity < -0.1, "polarity={}", r.polarity);
    }

    #[test]
    fn positive_report() {
        let r = analyze("Everyone is safe and the shelter is great");
        assert!(r.polarity > 0.1, "polarity={}", r.polarity);
    }

    #[test]
    fn negation_flips_and_damps() {
        let plain = analyze("good");
        let negated = analyze("not good");
        assert_eq!(plain.polarity, 0.7);
        assert!((negated.polarity - (-0.35)).abs() < 1e-9);

        let contraction = analyze("isn't safe");
        assert!((contraction.polarity - (-0.25)).abs() < 1e-9);
    }

    #[test]
    fn intensifier_scales() {
        let r = analyze("very bad");
        assert!((r.polarity - (-0.91)).abs() < 1e-9);
    }

    #[test]
    fn modifiers_reset_on_intervening_word() {
        let r = analyze("not the good");
        assert_eq!(r.polarity, 0.7);
    }

    #[test]
    fn polarity_is_clamped() {
        let r = analyze("extremely terrible");
        assert_eq!(r.polarity, -1.0);
    }

    #[test]
    fn noun_phrases_from_content_runs() {
        let r = analyze("Storm surge hit Marina Beach near the fishing harbour");
        assert_eq!(
            r.noun_phrases,
            vec!["Storm surge hit Marina Beach", "fishing harbour"]
        );
    }

    #[test]
    fn past_tense_breaks_phrase() {
        let r = analyze("Major flood damage reported");
        assert_eq!(r.noun_phrases, vec!["Major flood damage"]);
    }

    #[test]
    fn single_words_are_not_phrases() {
        let r = analyze("flood at dawn");
        assert!(r.noun_phrases.is_empty());
    }

    #[test]
    fn duplicate_phrases_kept() {
        let r = analyze("sea wall, sea wall");
        assert_eq!(r.noun_phrases, vec!["sea wall", "sea wall"]);
    }

    #[test]
    fn punctuation_resets_negation() {
        let r = analyze("not. good");
        assert_eq!(r.polarity, 0.7);
    }

    #[test]
    fn replacement_character_rejected() {
        let err = LexiconAnalyzer::new().analyze("flood \u{FFFD} here").unwrap_err();
        assert!(matches!(err, AnalysisError::Nlp(_)));
    }
}
