// crates/itihasa-executor/src/multi_hop.rs
// ============================================================================
// Module: Itihasa MULTI_HOP Strategy
// Description: Two-phase trigger/consequence traversal for "who benefited"
//              questions.
// Purpose: Find the non-violent downstream events that followed a seed's
//          KILL/DEATH, without counting further violence as a "benefit".
// Dependencies: itihasa-core, itihasa-graph, itihasa-planner
// ============================================================================

//! ## Overview
//! Phase 1 finds trigger events (KILL/DEATH involving a seed). Phase 2
//! looks at every non-seed participant of a trigger and accepts their
//! incident events that fall in a fixed six-type consequence whitelist —
//! `KILL`, `DEATH`, and `BATTLE` are excluded from Phase 2 outright,
//! regardless of `target_event_types`, enforcing the "benefit is a
//! non-violent follow-up" rule (testable property 8).

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashSet;

use itihasa_core::EntityId;
use itihasa_core::EventId;
use itihasa_core::EventType;
use itihasa_core::Trace;
use itihasa_graph::GraphStore;
use itihasa_planner::QueryPlan;

use crate::fact::StrategyOutcome;
use crate::result::MatchedEvent;
use crate::result::TraversalStats;

/// Trigger types Phase 1 looks for, intersected with `target_event_types`.
const TRIGGER_TYPES: [EventType; 2] = [EventType::Kill, EventType::Death];

/// The fixed consequence whitelist. `KILL`, `DEATH`, `BATTLE` are never
/// members, no matter what the plan's `target_event_types` contains.
const CONSEQUENCE_TYPES: [EventType; 6] = [
    EventType::AppointedAs,
    EventType::Coronation,
    EventType::Boon,
    EventType::Supported,
    EventType::Command,
    EventType::Rescued,
];

/// Runs the MULTI_HOP strategy.
pub(crate) fn run(
    plan: &QueryPlan,
    graph: &GraphStore,
    resolved_seeds: &[EntityId],
    trace: &mut Trace,
) -> StrategyOutcome {
    let trigger_types: BTreeSet<EventType> =
        TRIGGER_TYPES.into_iter().filter(|t| plan.target_event_types.contains(t)).collect();
    let seed_set: HashSet<EntityId> = resolved_seeds.iter().cloned().collect();

    let mut events_visited = 0usize;
    let mut matched: BTreeMap<EventId, MatchedEvent> = BTreeMap::new();
    let mut trigger_participants: HashSet<EntityId> = HashSet::new();

    for seed in resolved_seeds {
        let Ok(incident) = graph.events_incident_to(seed) else {
            continue;
        };
        for &event_id in incident {
            events_visited += 1;
            let Ok(event) = graph.event_by_id(event_id) else {
                continue;
            };
            if !trigger_types.contains(&event.event_type) {
                continue;
            }
            trace.push(format!("[MULTI_HOP] trigger event={event_id} seed={seed}"));
            for participant in &event.participants {
                if !seed_set.contains(participant) {
                    trigger_participants.insert(participant.clone());
                }
            }
            matched.entry(event_id).or_insert_with(|| to_matched(event));
        }
    }

    for participant in &trigger_participants {
        let Ok(incident) = graph.events_incident_to(participant) else {
            continue;
        };
        for &event_id in incident {
            events_visited += 1;
            let Ok(event) = graph.event_by_id(event_id) else {
                continue;
            };
            if matches!(event.event_type, EventType::Kill | EventType::Death | EventType::Battle) {
                trace.push(format!("[MULTI_HOP] reject event={event_id} reason=violent-exclusion"));
                continue;
            }
            if !CONSEQUENCE_TYPES.contains(&event.event_type) {
                continue;
            }
            trace.push(format!("[MULTI_HOP] consequence event={event_id} participant={participant}"));
            matched.entry(event_id).or_insert_with(|| to_matched(event));
        }
    }

    let matched_events: Vec<MatchedEvent> = matched.into_values().collect();
    let stats = TraversalStats {
        max_depth_reached: 2,
        events_visited,
        events_accepted: matched_events.len(),
        seeds_resolved: resolved_seeds.len(),
    };

    StrategyOutcome { matched_events, constraints_applied: Vec::new(), stats }
}

/// Copies an [`itihasa_core::Event`] by value into a [`MatchedEvent`].
fn to_matched(event: &itihasa_core::Event) -> MatchedEvent {
    MatchedEvent {
        id: event.id,
        tier: event.tier,
        event_type: event.event_type,
        participants: event.participants.clone(),
        sentence: event.sentence.clone(),
    }
}
