// crates/itihasa-planner/src/constraints.rs
// ============================================================================
// Module: Itihasa Plan Constraints
// Description: The optional constraint record attached to every Query Plan.
// Purpose: Capture agent-required, temporal-order, and causal-chain cues.
// Dependencies: crate::intent
// ============================================================================

//! ## Overview
//! Constraints are inferred, never guessed: each field is either set from a
//! literal lexical cue or left unset. Unset constraints simply do not
//! filter anything downstream.

use serde::Deserialize;
use serde::Serialize;

use crate::intent::Intent;
use crate::intent::TemporalOrder;
use crate::intent::resolve_temporal_order;

/// Lexical cues requiring both an actor and a victim to be present, with
/// their inflected forms ("killed", "slaying", "murders", ...) enumerated
/// explicitly rather than matched by prefix, which would also catch
/// unrelated words that merely share a stem (e.g. "diet" sharing "di").
const AGENT_REQUIRED_CUES: [&str; 14] = [
    "kill", "killed", "kills", "killing", "slew", "slay", "slays", "slaying", "slain", "murder",
    "murdered", "murders", "murdering", "murderer",
];

/// Optional constraints narrowing a traversal beyond intent and event type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    /// Whether the matched events must have at least two participants.
    pub agent_required: Option<bool>,
    /// The relative temporal ordering requested, if any.
    pub temporal_order: Option<TemporalOrder>,
    /// Whether this plan asks for a causal chain.
    pub causal_chain: Option<bool>,
}

/// Infers the constraint record from tokens and the classified intent.
#[must_use]
pub fn infer_constraints(tokens: &[String], intent: Intent) -> Constraints {
    let agent_required = tokens.iter().any(|token| AGENT_REQUIRED_CUES.contains(&token.as_str()));
    Constraints {
        agent_required: agent_required.then_some(true),
        temporal_order: resolve_temporal_order(tokens),
        causal_chain: (intent == Intent::Causal).then_some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::infer_constraints;
    use crate::intent::Intent;
    use crate::tokenize::tokenize;

    #[test]
    fn kill_cue_sets_agent_required() {
        let tokens = tokenize("Who killed Karna?");
        let constraints = infer_constraints(&tokens, Intent::Fact);
        assert_eq!(constraints.agent_required, Some(true));
    }

    #[test]
    fn no_cue_leaves_agent_required_unset() {
        let tokens = tokenize("Who is Karna?");
        let constraints = infer_constraints(&tokens, Intent::Fact);
        assert_eq!(constraints.agent_required, None);
    }

    #[test]
    fn causal_intent_sets_causal_chain() {
        let tokens = tokenize("Why did Bhishma support Duryodhana?");
        let constraints = infer_constraints(&tokens, Intent::Causal);
        assert_eq!(constraints.causal_chain, Some(true));
    }
}
