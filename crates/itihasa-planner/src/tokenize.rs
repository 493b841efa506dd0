// crates/itihasa-planner/src/tokenize.rs
// ============================================================================
// Module: Itihasa Tokenizer
// Description: Lowercasing, whitespace-collapsing normalization and
//              letter-boundary tokenization shared by intent classification
//              and seed extraction.
// Purpose: Give the planner one deterministic view of the question text.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Question text is normalized once: lowercased, and split into words on
//! non-letter boundaries (so punctuation such as `"Karna's"` yields
//! `["karna", "s"]`). Both the intent classifier and the seed extractor
//! consume this same token stream so that "same input always yields the
//! same plan" (determinism, §8) holds trivially at this layer.

/// Lowercases and tokenizes free-form text into letter-only words.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|ch: char| !ch.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercases and collapses internal whitespace, for phrase/substring cues.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize_whitespace;
    use super::tokenize;

    #[test]
    fn tokenizes_on_non_letter_boundaries() {
        assert_eq!(tokenize("Who killed Karna?"), vec!["who", "killed", "karna"]);
    }

    #[test]
    fn splits_possessives() {
        assert_eq!(tokenize("Abhimanyu's death"), vec!["abhimanyu", "s", "death"]);
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_whitespace("  led   to  victory "), "led to victory");
    }
}
