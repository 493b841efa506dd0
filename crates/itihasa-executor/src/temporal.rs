// crates/itihasa-executor/src/temporal.rs
// ============================================================================
// Module: Itihasa TEMPORAL Strategy
// Description: Anchor-relative event selection using the event-id integer
//              suffix as the sole temporal proxy.
// Purpose: Answer "what happened before/after/during X" questions.
// Dependencies: itihasa-core, itihasa-graph, itihasa-planner
// ============================================================================

//! ## Overview
//! DURING has no reliable semantics over an id-ordering proxy; the
//! "equal-to" rule here is a stub, per the specification's design notes,
//! and will degrade to no result for nearly all DURING questions. This is
//! an accepted open question, not a guessed fix.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use itihasa_core::EntityId;
use itihasa_core::EventId;
use itihasa_core::Trace;
use itihasa_graph::GraphStore;
use itihasa_planner::QueryPlan;
use itihasa_planner::TemporalOrder;

use crate::fact::StrategyOutcome;
use crate::result::MatchedEvent;
use crate::result::TraversalStats;

/// Maximum number of events a TEMPORAL query may return.
const MAX_RESULTS: usize = 20;

/// Runs the TEMPORAL strategy.
pub(crate) fn run(
    plan: &QueryPlan,
    graph: &GraphStore,
    resolved_seeds: &[EntityId],
    trace: &mut Trace,
) -> StrategyOutcome {
    let Some(order) = plan.constraints.temporal_order else {
        trace.push("[TEMPORAL] no temporal_order resolved from question text".to_string());
        return empty_outcome(resolved_seeds.len());
    };

    let mut events_visited = 0usize;
    let mut anchor_events: BTreeSet<EventId> = BTreeSet::new();
    for seed in resolved_seeds {
        let Ok(incident) = graph.events_incident_to(seed) else {
            continue;
        };
        for &event_id in incident {
            events_visited += 1;
            let Ok(event) = graph.event_by_id(event_id) else {
                continue;
            };
            if plan.target_event_types.contains(&event.event_type) {
                anchor_events.insert(event_id);
                trace.push(format!("[TEMPORAL] anchor event={event_id} seed={seed}"));
            }
        }
    }

    if anchor_events.is_empty() {
        trace.push("[TEMPORAL] no anchor events found".to_string());
        return empty_outcome(resolved_seeds.len());
    }
    let anchor_suffixes: BTreeSet<u64> = anchor_events.iter().map(|id| id.suffix()).collect();

    // `anchor_suffixes` was just checked non-empty; fold rather than
    // `Option::unwrap` so no panic path exists even in principle.
    let anchor_suffix = match order {
        TemporalOrder::Before => anchor_suffixes.iter().copied().fold(0u64, u64::max),
        TemporalOrder::After | TemporalOrder::During => {
            anchor_suffixes.iter().copied().fold(u64::MAX, u64::min)
        }
    };
    trace.push(format!("[TEMPORAL] anchor_suffix={anchor_suffix} order={order:?}"));

    let all_event_ids = graph.all_event_ids();
    let mut accepted: BTreeMap<EventId, MatchedEvent> = BTreeMap::new();
    for event_id in all_event_ids {
        events_visited += 1;
        let Ok(event) = graph.event_by_id(event_id) else {
            continue;
        };
        let satisfies = match order {
            TemporalOrder::Before => event_id.suffix() < anchor_suffix,
            TemporalOrder::After => event_id.suffix() > anchor_suffix,
            TemporalOrder::During => event_id.suffix() == anchor_suffix,
        };
        if !satisfies {
            continue;
        }
        trace.push(format!("[TEMPORAL] accept event={event_id}"));
        accepted.insert(event_id, MatchedEvent {
            id: event.id,
            tier: event.tier,
            event_type: event.event_type,
            participants: event.participants.clone(),
            sentence: event.sentence.clone(),
        });
    }

    // The resolver identifies the anchor by scanning `matched_events` for a
    // seed-incident DEATH/BATTLE event, so the anchor itself must be
    // present even though it never satisfies its own strict BEFORE/AFTER
    // relation; DURING already includes it via the equal-to branch above.
    for &anchor_id in &anchor_events {
        if let Ok(event) = graph.event_by_id(anchor_id) {
            accepted.entry(anchor_id).or_insert_with(|| MatchedEvent {
                id: event.id,
                tier: event.tier,
                event_type: event.event_type,
                participants: event.participants.clone(),
                sentence: event.sentence.clone(),
            });
        }
    }

    let mut accepted: Vec<(EventId, MatchedEvent)> = accepted.into_iter().collect();
    match order {
        TemporalOrder::Before => accepted.sort_by(|a, b| b.0.cmp(&a.0)),
        TemporalOrder::After | TemporalOrder::During => accepted.sort_by_key(|(id, _)| *id),
    }
    accepted.truncate(MAX_RESULTS);

    let matched_events: Vec<MatchedEvent> = accepted.into_iter().map(|(_, event)| event).collect();
    let stats = TraversalStats {
        max_depth_reached: 2,
        events_visited,
        events_accepted: matched_events.len(),
        seeds_resolved: resolved_seeds.len(),
    };

    StrategyOutcome { matched_events, constraints_applied: vec!["temporal_order".to_string()], stats }
}

/// Builds the empty strategy outcome used when no `temporal_order` was
/// resolved or no anchor events were found.
fn empty_outcome(seeds_resolved: usize) -> StrategyOutcome {
    StrategyOutcome {
        matched_events: Vec::new(),
        constraints_applied: Vec::new(),
        stats: TraversalStats {
            max_depth_reached: 2,
            events_visited: 0,
            events_accepted: 0,
            seeds_resolved,
        },
    }
}
