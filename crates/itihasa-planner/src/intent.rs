// crates/itihasa-planner/src/intent.rs
// ============================================================================
// Module: Itihasa Intent Classification
// Description: Rule-based classification of question intent and temporal
//              ordering keyword.
// Purpose: First-match-wins priority classification, per the specification.
// Dependencies: crate::tokenize
// ============================================================================

//! ## Overview
//! Classification is priority-ordered and deliberately tests MULTI_HOP
//! triggers before the FACT default, so "who benefited from X" is not
//! mis-tagged as a simple who-question. Priority order: CAUSAL, TEMPORAL,
//! MULTI_HOP, FACT.

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Intent
// ============================================================================

/// The four question intents the planner can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// A simple fact lookup ("who", "what", "when").
    Fact,
    /// A question ordered relative to another event ("before", "after").
    Temporal,
    /// A question asking for a cause ("why", "because").
    Causal,
    /// A question asking for a downstream consequence ("who benefited").
    MultiHop,
}

impl Intent {
    /// The BFS/lookahead traversal depth this intent is permitted.
    #[must_use]
    pub const fn default_depth(self) -> u8 {
        match self {
            Self::Fact => 1,
            Self::Temporal | Self::Causal | Self::MultiHop => 2,
        }
    }
}

// ============================================================================
// SECTION: Temporal Order
// ============================================================================

/// The relative ordering a TEMPORAL question asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemporalOrder {
    /// Strictly earlier than the anchor.
    Before,
    /// Strictly later than the anchor.
    After,
    /// Same narrative neighborhood as the anchor.
    During,
}

// ============================================================================
// SECTION: Classification
// ============================================================================

const CAUSAL_CUES: [&str; 3] = ["why", "because", "reason"];
const TEMPORAL_CUES: [&str; 6] = ["before", "after", "during", "first", "last", "then"];
const MULTI_HOP_SINGLE_CUES: [&str; 2] = ["gained", "advantage"];

/// Classifies question intent, first-match-wins over CAUSAL, TEMPORAL,
/// MULTI_HOP, then FACT by default.
#[must_use]
pub fn classify(tokens: &[String], normalized_text: &str) -> Intent {
    if any_token_matches(tokens, &CAUSAL_CUES) {
        return Intent::Causal;
    }
    if any_token_matches(tokens, &TEMPORAL_CUES) {
        return Intent::Temporal;
    }
    if is_multi_hop(tokens, normalized_text) {
        return Intent::MultiHop;
    }
    Intent::Fact
}

fn any_token_matches(tokens: &[String], cues: &[&str]) -> bool {
    tokens.iter().any(|token| cues.contains(&token.as_str()))
}

/// Matches the MULTI_HOP trigger set: `benefit(ed|s)?`, `consequence(s)?`,
/// `impact(ed|s)?`, `led to`, `result(ed)? in`, `gained`, `advantage`.
fn is_multi_hop(tokens: &[String], normalized_text: &str) -> bool {
    if any_token_matches(tokens, &MULTI_HOP_SINGLE_CUES) {
        return true;
    }
    if tokens.iter().any(|token| matches!(token.as_str(), "benefit" | "benefited" | "benefits")) {
        return true;
    }
    if tokens.iter().any(|token| matches!(token.as_str(), "consequence" | "consequences")) {
        return true;
    }
    if tokens.iter().any(|token| matches!(token.as_str(), "impact" | "impacted" | "impacts")) {
        return true;
    }
    if normalized_text.contains("led to") {
        return true;
    }
    normalized_text.contains("result in") || normalized_text.contains("resulted in")
}

/// Resolves the [`TemporalOrder`] keyword actually present in the text, if
/// any of `before`/`after`/`during` literally occur. The broader TEMPORAL
/// trigger set (`first`, `last`, `then`) classifies intent but does not by
/// itself resolve an ordering: a plan with intent TEMPORAL and no resolved
/// order is valid and simply yields `found=false` downstream, per the
/// "never fabricate" rule.
#[must_use]
pub fn resolve_temporal_order(tokens: &[String]) -> Option<TemporalOrder> {
    if any_token_matches(tokens, &["before"]) {
        return Some(TemporalOrder::Before);
    }
    if any_token_matches(tokens, &["after"]) {
        return Some(TemporalOrder::After);
    }
    if any_token_matches(tokens, &["during"]) {
        return Some(TemporalOrder::During);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::Intent;
    use super::classify;
    use super::resolve_temporal_order;
    use crate::tokenize::normalize_whitespace;
    use crate::tokenize::tokenize;

    fn classify_text(text: &str) -> Intent {
        let tokens = tokenize(text);
        let normalized = normalize_whitespace(text);
        classify(&tokens, &normalized)
    }

    #[test]
    fn fact_is_default() {
        assert_eq!(classify_text("Who killed Karna?"), Intent::Fact);
    }

    #[test]
    fn multi_hop_before_fact_for_benefit_questions() {
        assert_eq!(classify_text("Who benefited from Drona's death?"), Intent::MultiHop);
    }

    #[test]
    fn causal_takes_priority_over_temporal() {
        assert_eq!(classify_text("Why did this happen before the battle?"), Intent::Causal);
    }

    #[test]
    fn temporal_detects_after() {
        let text = "What happened after Abhimanyu's death?";
        assert_eq!(classify_text(text), Intent::Temporal);
        let tokens = tokenize(text);
        assert_eq!(resolve_temporal_order(&tokens), Some(super::TemporalOrder::After));
    }

    #[test]
    fn multi_hop_matches_led_to_phrase() {
        assert_eq!(classify_text("What led to the coronation?"), Intent::MultiHop);
    }

    #[test]
    fn multi_hop_matches_result_in_phrase() {
        assert_eq!(classify_text("What resulted in his victory?"), Intent::MultiHop);
    }
}
