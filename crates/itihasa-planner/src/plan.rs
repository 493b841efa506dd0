// crates/itihasa-planner/src/plan.rs
// ============================================================================
// Module: Itihasa Query Plan
// Description: The Query Plan record and the top-level `plan` entry point.
// Purpose: Assemble intent, seeds, target event types, constraints, and
//          traversal depth into the single record the executor consumes.
// Dependencies: itihasa-core, itihasa-graph, crate::{constraints, event_types,
//               intent, seeds, tokenize}
// ============================================================================

//! ## Overview
//! [`plan`] is the crate's only public entry point. It never fails:
//! unparseable or entity-free input still produces a well-formed plan
//! (intent FACT, empty seeds, empty-by-policy event types default, depth
//! 1), per the specification's "never fails" requirement on the planner.

use std::collections::BTreeSet;

use itihasa_core::EntityId;
use itihasa_core::EventType;
use itihasa_graph::EntityRegistrySnapshot;
use serde::Deserialize;
use serde::Serialize;

use crate::constraints::Constraints;
use crate::constraints::infer_constraints;
use crate::event_types::infer_target_event_types;
use crate::intent::Intent;
use crate::intent::classify;
use crate::seeds::extract_seeds;
use crate::tokenize::normalize_whitespace;
use crate::tokenize::tokenize;

/// A deterministic, pure-function translation of question text into a
/// structured traversal request.
///
/// # Invariants
/// - `traversal_depth` is `1` for [`Intent::Fact`], `2` otherwise.
/// - Given the same `(question_text, registry)`, [`plan`] always returns an
///   equal [`QueryPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPlan {
    /// The original question text, unmodified.
    pub question_text: String,
    /// The classified intent.
    pub intent: Intent,
    /// Seed entity ids extracted from the text, in first-hit order.
    pub seed_entities: Vec<EntityId>,
    /// Target event types the executor should accept.
    pub target_event_types: BTreeSet<EventType>,
    /// Inferred constraints.
    pub constraints: Constraints,
    /// Traversal depth bound (1 or 2).
    pub traversal_depth: u8,
}

/// Classifies intent, extracts seed entities, and infers constraints and
/// traversal depth from free-form question text. Never fails.
#[must_use]
pub fn plan(question_text: &str, registry: &EntityRegistrySnapshot) -> QueryPlan {
    let tokens = tokenize(question_text);
    let normalized = normalize_whitespace(question_text);
    let intent = classify(&tokens, &normalized);
    let seed_entities = extract_seeds(&tokens, registry);
    let target_event_types = infer_target_event_types(&tokens, intent);
    let constraints = infer_constraints(&tokens, intent);

    QueryPlan {
        question_text: question_text.to_string(),
        intent,
        seed_entities,
        target_event_types,
        constraints,
        traversal_depth: intent.default_depth(),
    }
}
