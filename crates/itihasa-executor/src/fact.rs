// crates/itihasa-executor/src/fact.rs
// ============================================================================
// Module: Itihasa FACT Strategy
// Description: Depth-1 union of an event type/agent-required filter over
//              each resolved seed's incident events.
// Purpose: Answer simple fact lookups ("who killed X?").
// Dependencies: itihasa-core, itihasa-graph, itihasa-planner
// ============================================================================

use std::collections::BTreeMap;

use itihasa_core::EntityId;
use itihasa_core::EventId;
use itihasa_core::Trace;
use itihasa_graph::GraphStore;
use itihasa_planner::QueryPlan;

use crate::result::MatchedEvent;
use crate::result::TraversalStats;

/// Output of a strategy pass: matched events plus the subset of
/// constraint names that actually rejected at least one event.
pub(crate) struct StrategyOutcome {
    /// Matched events, deduplicated and ordered per the strategy.
    pub(crate) matched_events: Vec<MatchedEvent>,
    /// Names of constraints that actually rejected at least one event.
    pub(crate) constraints_applied: Vec<String>,
    /// Traversal statistics for this strategy pass.
    pub(crate) stats: TraversalStats,
}

/// Runs the FACT strategy: for each resolved seed, enumerate incident
/// events and accept those matching the target event-type set and
/// (if set) the agent-required participant-count floor.
pub(crate) fn run(
    plan: &QueryPlan,
    graph: &GraphStore,
    resolved_seeds: &[EntityId],
    trace: &mut Trace,
) -> StrategyOutcome {
    let agent_required = plan.constraints.agent_required.unwrap_or(false);
    let mut rejected_by_agent_required = false;
    let mut events_visited = 0usize;
    let mut by_id: BTreeMap<EventId, MatchedEvent> = BTreeMap::new();

    for seed in resolved_seeds {
        let Ok(incident) = graph.events_incident_to(seed) else {
            continue;
        };
        for &event_id in incident {
            events_visited += 1;
            let Ok(event) = graph.event_by_id(event_id) else {
                continue;
            };
            let type_ok = plan.target_event_types.is_empty()
                || plan.target_event_types.contains(&event.event_type);
            if !type_ok {
                trace.push(format!("[FACT] reject event={event_id} reason=type-not-targeted"));
                continue;
            }
            if agent_required && event.participants.len() < 2 {
                trace.push(format!("[FACT] reject event={event_id} reason=agent-required"));
                rejected_by_agent_required = true;
                continue;
            }
            trace.push(format!("[FACT] accept event={event_id} seed={seed}"));
            by_id.entry(event_id).or_insert_with(|| MatchedEvent {
                id: event.id,
                tier: event.tier,
                event_type: event.event_type,
                participants: event.participants.clone(),
                sentence: event.sentence.clone(),
            });
        }
    }

    let mut constraints_applied = Vec::new();
    if agent_required && rejected_by_agent_required {
        constraints_applied.push("agent_required".to_string());
    }

    let matched_events: Vec<MatchedEvent> = by_id.into_values().collect();
    let stats = TraversalStats {
        max_depth_reached: 1,
        events_visited,
        events_accepted: matched_events.len(),
        seeds_resolved: resolved_seeds.len(),
    };

    StrategyOutcome { matched_events, constraints_applied, stats }
}
