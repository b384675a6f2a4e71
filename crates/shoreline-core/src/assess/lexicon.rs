//! Fake-indicator lexicon scan
//!
//! Substring match, not word match: "falsely" triggers `false`, "rumors"
//! triggers `rumor`. Uses SIMD via memchr on native, pure Rust on WASM.

use serde::{Deserialize, Serialize};

/// Terms that undermine the credibility of a report
pub const FAKE_INDICATORS: [&str; 6] = [
    "fake",
    "hoax",
    "rumor",
    "unconfirmed",
    "false",
    "misleading",
];

/// Indicators found in a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FakeIndicators {
    /// Triggered lexicon terms, in lexicon order
    pub triggered: Vec<String>,
}

impl FakeIndicators {
    pub fn is_present(&self) -> bool {
        !self.triggered.is_empty()
    }
}

/// Scan text for lexicon terms, ignoring case.
pub fn detect_fake_indicators(text: &str) -> FakeIndicators {
    let lower = text.to_lowercase();
    let triggered = FAKE_INDICATORS
        .iter()
        .filter(|term| contains(&lower, term))
        .map(|term| term.to_string())
        .collect();

    FakeIndicators { triggered }
}

#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    #[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
    {
        memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
    }

    #[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
    {
        haystack.contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text() {
        let found = detect_fake_indicators("Major flood damage reported");
        assert!(!found.is_present());
    }

    #[test]
    fn triggered_in_lexicon_order() {
        let found = detect_fake_indicators("this is fake news, hoax alert");
        assert_eq!(found.triggered, vec!["fake", "hoax"]);

        let found = detect_fake_indicators("Misleading RUMOR, possibly a hoax");
        assert_eq!(found.triggered, vec!["hoax", "rumor", "misleading"]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            detect_fake_indicators("UNCONFIRMED reports of a tsunami").triggered,
            vec!["unconfirmed"]
        );
        assert!(detect_fake_indicators("Fake").is_present());
    }

    #[test]
    fn substring_not_word_match() {
        assert!(detect_fake_indicators("he falsely claimed").is_present());
        assert!(detect_fake_indicators("rumors are spreading").is_present());
        assert!(detect_fake_indicators("the photo was faked").is_present());
    }

    #[test]
    fn empty_text() {
        assert!(detect_fake_indicators("").triggered.is_empty());
    }
}
