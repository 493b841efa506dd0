// crates/itihasa-executor/src/result.rs
// ============================================================================
// Module: Itihasa Query Result
// Description: The Graph Executor's output record: matched events, matched
//              entities, applied constraints, traversal statistics, and a
//              decision trace.
// Purpose: Carry everything the Answer Resolver needs without holding a
//          reference back into the Graph Store.
// Dependencies: itihasa-core, itihasa-planner, serde, std::time
// ============================================================================

//! ## Overview
//! A [`QueryResult`] holds only ids and copied scalar fields: it outlives
//! the [`itihasa_graph::GraphStore`] borrow used to build it and is
//! trivially serializable. `found=false` is not an error; it is a valid,
//! fully-traced outcome (an empty match is a precursor to `NO_ANSWER`).

use std::time::Duration;

use itihasa_core::EntityId;
use itihasa_core::EntityKind;
use itihasa_core::EventId;
use itihasa_core::EventType;
use itihasa_core::Tier;
use itihasa_core::Trace;
use itihasa_planner::Intent;
use serde::Deserialize;
use serde::Serialize;

/// A matched event, copied out of the Graph Store by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedEvent {
    /// The event id.
    pub id: EventId,
    /// The event's narrative tier.
    pub tier: Tier,
    /// The event's type.
    pub event_type: EventType,
    /// Participant entity ids, in stored order.
    pub participants: Vec<EntityId>,
    /// The event's evidentiary sentence.
    pub sentence: String,
}

/// A matched entity, copied out of the Graph Store by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedEntity {
    /// The entity id.
    pub id: EntityId,
    /// Lowercased canonical name.
    pub canonical_name: String,
    /// Entity classification.
    pub kind: EntityKind,
    /// Popularity tiebreak carried from the store.
    pub incident_event_count: u32,
}

/// Traversal statistics recorded for observability and the depth-bound
/// invariant (no result's `max_depth_reached` may exceed the plan's
/// declared `traversal_depth`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    /// The deepest BFS/lookahead level actually reached.
    pub max_depth_reached: u8,
    /// Number of events visited (considered, not necessarily accepted).
    pub events_visited: usize,
    /// Number of events accepted into `matched_events`.
    pub events_accepted: usize,
    /// Number of seeds that resolved to a known entity.
    pub seeds_resolved: usize,
}

/// The Graph Executor's output: everything the Answer Resolver needs,
/// referencing the Graph Store only by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The original question text, carried through unmodified.
    pub question_text: String,
    /// The plan's classified intent.
    pub intent: Intent,
    /// Whether any events matched.
    pub found: bool,
    /// Seed entity ids that resolved (a subset of the plan's seeds).
    pub resolved_seeds: Vec<EntityId>,
    /// Matched events, deduplicated and ordered per the intent strategy.
    pub matched_events: Vec<MatchedEvent>,
    /// Matched entities, derived from matched-event participants.
    pub matched_entities: Vec<MatchedEntity>,
    /// Names of constraints that actually filtered at least one event.
    pub constraints_applied: Vec<String>,
    /// Traversal statistics.
    pub traversal_stats: TraversalStats,
    /// The ordered decision trace.
    pub trace: Trace,
    /// Wall-clock time spent executing the query.
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

/// Serializes [`Duration`] as whole milliseconds; the elapsed field is
/// explicitly excluded from the determinism invariant (§8) and exists for
/// observability only.
mod duration_millis {
    use std::time::Duration;

    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    pub(super) fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "query durations never approach u64::MAX milliseconds"
        )]
        let millis = value.as_millis() as u64;
        serializer.serialize_u64(millis)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
