// crates/itihasa-planner/src/event_types.rs
// ============================================================================
// Module: Itihasa Target Event Type Inference
// Description: Per-intent default event-type sets, narrowed by lexical cues.
// Purpose: Decide which event types the executor should accept.
// Dependencies: itihasa-core, crate::intent
// ============================================================================

//! ## Overview
//! Every intent has a default target-event-type set. Lexical cues can
//! narrow that default down to the subset they name — "kill" narrows
//! toward KILL, "death" toward DEATH, and so on — but narrowing never
//! empties the set: if the cued types share nothing with the intent's
//! default, the default is kept unnarrowed. This keeps the planner from
//! ever handing the executor a target set with no hope of a match.
//!
//! Narrowing only applies to FACT. CAUSAL, TEMPORAL, and MULTI_HOP each
//! need their *entire* default set available during traversal — CAUSAL's
//! BFS, for instance, must see VOW and COMMAND alongside SUPPORTED to
//! walk a support event back to its cause, even when the question text
//! only literally says "support". Narrowing those sets down to the one
//! literal cue would strand the traversal on an incomplete type set.

use std::collections::BTreeSet;

use itihasa_core::EventType;

use crate::intent::Intent;

/// Returns the intent's default target event-type set.
#[must_use]
pub fn default_event_types(intent: Intent) -> BTreeSet<EventType> {
    match intent {
        Intent::Fact => BTreeSet::from([
            EventType::Kill,
            EventType::Death,
            EventType::Battle,
            EventType::Coronation,
            EventType::AppointedAs,
        ]),
        Intent::Causal => BTreeSet::from([
            EventType::Supported,
            EventType::Defended,
            EventType::Vow,
            EventType::Command,
        ]),
        Intent::Temporal => {
            BTreeSet::from([EventType::Death, EventType::Battle, EventType::Retreated])
        }
        Intent::MultiHop => {
            BTreeSet::from([EventType::Kill, EventType::Death, EventType::Boon, EventType::Curse])
        }
    }
}

/// Narrows the default set by lexical cues, never emptying it.
#[must_use]
pub fn infer_target_event_types(tokens: &[String], intent: Intent) -> BTreeSet<EventType> {
    let default = default_event_types(intent);
    if intent != Intent::Fact {
        return default;
    }

    let mut forced = BTreeSet::new();
    if tokens.iter().any(|token| {
        matches!(
            token.as_str(),
            "kill" | "killed" | "kills" | "killing" | "slew" | "slay" | "slays" | "slaying" | "slain"
        )
    }) {
        forced.insert(EventType::Kill);
    }
    if tokens
        .iter()
        .any(|token| matches!(token.as_str(), "die" | "died" | "dies" | "dying" | "death" | "deaths"))
    {
        forced.insert(EventType::Death);
    }
    if tokens.iter().any(|token| {
        matches!(token.as_str(), "crown" | "crowned" | "crowns" | "crowning" | "coronation" | "coronations")
    }) {
        forced.insert(EventType::Coronation);
    }
    if tokens
        .iter()
        .any(|token| matches!(token.as_str(), "support" | "supported" | "supports" | "supporting"))
    {
        forced.insert(EventType::Supported);
    }

    if forced.is_empty() {
        return default;
    }

    let narrowed: BTreeSet<EventType> = default.intersection(&forced).copied().collect();
    if narrowed.is_empty() { default } else { narrowed }
}
