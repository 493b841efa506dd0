// crates/itihasa-executor/src/causal.rs
// ============================================================================
// Module: Itihasa CAUSAL Strategy
// Description: Breadth-first traversal over the visited-entity set, bounded
//              by the plan's declared depth.
// Purpose: Answer "why did X do Y" questions by following participation
//          chains outward from the seeds.
// Dependencies: itihasa-core, itihasa-graph, itihasa-planner
// ============================================================================

//! ## Overview
//! The visited set is over entities, never events: the same event may be
//! reached from multiple participants (the corpus graph is cyclic) but is
//! added to the matched-event set only once, by id. Depth is checked
//! before enqueue, so the traversal cannot overrun `plan.traversal_depth`
//! even in principle (see [`itihasa_core::InvariantViolation::DepthExceeded`]).

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::collections::VecDeque;

use itihasa_core::EntityId;
use itihasa_core::EventId;
use itihasa_core::Trace;
use itihasa_graph::GraphStore;
use itihasa_planner::QueryPlan;

use crate::fact::StrategyOutcome;
use crate::result::MatchedEvent;
use crate::result::TraversalStats;

/// Runs the CAUSAL strategy: BFS from every resolved seed, bounded by
/// `plan.traversal_depth`.
pub(crate) fn run(
    plan: &QueryPlan,
    graph: &GraphStore,
    resolved_seeds: &[EntityId],
    trace: &mut Trace,
) -> StrategyOutcome {
    let max_depth = plan.traversal_depth;
    let mut visited: HashSet<EntityId> = resolved_seeds.iter().cloned().collect();
    let mut queue: VecDeque<(EntityId, u8)> =
        resolved_seeds.iter().map(|seed| (seed.clone(), 0)).collect();
    let mut by_id: BTreeMap<EventId, MatchedEvent> = BTreeMap::new();
    let mut events_visited = 0usize;
    let mut max_depth_reached = 0u8;

    while let Some((entity, depth)) = queue.pop_front() {
        max_depth_reached = max_depth_reached.max(depth);
        let Ok(incident) = graph.events_incident_to(&entity) else {
            continue;
        };
        for &event_id in incident {
            events_visited += 1;
            let Ok(event) = graph.event_by_id(event_id) else {
                continue;
            };
            if !plan.target_event_types.contains(&event.event_type) {
                continue;
            }
            if !by_id.contains_key(&event_id) {
                trace.push(format!("[CAUSAL] accept depth={depth} event={event_id}"));
                by_id.insert(
                    event_id,
                    MatchedEvent {
                        id: event.id,
                        tier: event.tier,
                        event_type: event.event_type,
                        participants: event.participants.clone(),
                        sentence: event.sentence.clone(),
                    },
                );
            }
            if depth < max_depth {
                for participant in &event.participants {
                    if visited.insert(participant.clone()) {
                        queue.push_back((participant.clone(), depth + 1));
                    }
                }
            }
        }
    }

    let matched_events: Vec<MatchedEvent> = by_id.into_values().collect();
    let stats = TraversalStats {
        max_depth_reached,
        events_visited,
        events_accepted: matched_events.len(),
        seeds_resolved: resolved_seeds.len(),
    };

    // `causal_chain` is a descriptive flag set by the planner, not a
    // structural filter over events, so it never appears here: only
    // constraints that actually rejected an event belong in this list.
    StrategyOutcome { matched_events, constraints_applied: Vec::new(), stats }
}
