// crates/itihasa-executor/src/lib.rs
// ============================================================================
// Module: Itihasa Graph Executor Library
// Description: Pure, per-intent traversal of the Graph Store under the
//              Query Plan's depth and constraint limits.
// Purpose: Evaluate a Query Plan into a Query Result without ever
//          mutating the Graph Store or fabricating a match.
// Dependencies: itihasa-core, itihasa-graph, itihasa-planner
// ============================================================================

//! ## Overview
//! [`execute`] never fails: unresolved seeds, empty candidate sets, and
//! intent/constraint combinations with no matches all surface as
//! `found=false` on a fully-traced [`QueryResult`], per the specification's
//! "the executor never reports a partial graph" requirement. Each intent
//! gets its own traversal strategy module; this crate root only resolves
//! seeds, dispatches, and assembles the result.

mod causal;
mod entities;
mod fact;
mod multi_hop;
mod preamble;
mod result;
mod temporal;

pub use result::MatchedEntity;
pub use result::MatchedEvent;
pub use result::QueryResult;
pub use result::TraversalStats;

use std::time::Instant;

use itihasa_core::Trace;
use itihasa_graph::GraphStore;
use itihasa_planner::Intent;
use itihasa_planner::QueryPlan;

use crate::fact::StrategyOutcome;
use crate::preamble::resolve_seeds;

/// Evaluates `plan` against `graph`, returning every event that satisfies
/// the plan's constraints without exceeding its declared depth. Never
/// throws: an empty result is a valid outcome, not an error.
#[must_use]
pub fn execute(plan: &QueryPlan, graph: &GraphStore) -> QueryResult {
    let started = Instant::now();
    let mut trace = Trace::new();

    let resolved_seeds = resolve_seeds(&plan.seed_entities, graph, &mut trace);
    if resolved_seeds.is_empty() {
        trace.push("[EXECUTE] no seed resolved; expecting found=false".to_string());
    }

    let StrategyOutcome { matched_events, constraints_applied, stats } = match plan.intent {
        Intent::Fact => fact::run(plan, graph, &resolved_seeds, &mut trace),
        Intent::Temporal => temporal::run(plan, graph, &resolved_seeds, &mut trace),
        Intent::Causal => causal::run(plan, graph, &resolved_seeds, &mut trace),
        Intent::MultiHop => multi_hop::run(plan, graph, &resolved_seeds, &mut trace),
    };

    let matched_entities = entities::extract_matched_entities(&matched_events, graph);
    let found = !matched_events.is_empty();
    if !found {
        trace.push("[EXECUTE] no events matched".to_string());
    }

    QueryResult {
        question_text: plan.question_text.clone(),
        intent: plan.intent,
        found,
        resolved_seeds,
        matched_events,
        matched_entities,
        constraints_applied,
        traversal_stats: stats,
        trace,
        elapsed: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::missing_docs_in_private_items,
        reason = "Test-only assertions are permitted."
    )]

    use itihasa_core::EntityKind;
    use itihasa_core::EventType;
    use itihasa_core::Tier;
    use itihasa_graph::EdgeRecord;
    use itihasa_graph::EntityRecord;
    use itihasa_graph::EventRecord;
    use itihasa_graph::GraphStore;
    use itihasa_planner::plan;

    use super::execute;

    fn edge(source: &str, event: &EventRecord) -> EdgeRecord {
        EdgeRecord {
            source: source.to_string(),
            relation: "PARTICIPATED_IN".to_string(),
            target: event.id.clone(),
            evidence: event.sentence.clone(),
        }
    }

    fn s1_graph() -> GraphStore {
        let karna = EntityRecord {
            id: "person_karna".to_string(),
            canonical_name: "karna".to_string(),
            kind: EntityKind::Person,
            event_count: 2,
            aliases: vec!["karna".to_string()],
        };
        let arjuna = EntityRecord {
            id: "person_arjuna".to_string(),
            canonical_name: "arjuna".to_string(),
            kind: EntityKind::Person,
            event_count: 1,
            aliases: vec!["arjuna".to_string()],
        };
        let kill = EventRecord {
            id: "E500".to_string(),
            event_type: EventType::Kill,
            tier: Tier::Macro,
            sentence: "Arjuna killed Karna.".to_string(),
            participants: vec!["person_arjuna".to_string(), "person_karna".to_string()],
        };
        let death = EventRecord {
            id: "E600".to_string(),
            event_type: EventType::Death,
            tier: Tier::Macro,
            sentence: "Karna died.".to_string(),
            participants: vec!["person_karna".to_string()],
        };
        let edges = vec![edge("person_arjuna", &kill), edge("person_karna", &kill), edge(
            "person_karna",
            &death,
        )];
        GraphStore::from_records(vec![karna, arjuna], vec![kill, death], edges)
            .unwrap_or_else(|err| panic!("fixture graph must load: {err}"))
    }

    #[test]
    fn fact_who_killed_karna_matches_kill_not_death() {
        let graph = s1_graph();
        let query_plan = plan("Who killed Karna?", graph.registry());
        let result = execute(&query_plan, &graph);
        assert!(result.found);
        let ids: Vec<String> = result.matched_events.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["E500".to_string()]);
    }

    #[test]
    fn unresolved_seed_yields_not_found() {
        let graph = s1_graph();
        let query_plan = plan("Who killed Nobody?", graph.registry());
        let result = execute(&query_plan, &graph);
        assert!(!result.found);
        assert!(query_plan.seed_entities.is_empty());
    }

    #[test]
    fn agent_required_rejects_single_participant_kill() {
        let karna = EntityRecord {
            id: "person_karna".to_string(),
            canonical_name: "karna".to_string(),
            kind: EntityKind::Person,
            event_count: 1,
            aliases: vec!["karna".to_string()],
        };
        let lone_kill = EventRecord {
            id: "E900".to_string(),
            event_type: EventType::Kill,
            tier: Tier::Macro,
            sentence: "Karna struck alone.".to_string(),
            participants: vec!["person_karna".to_string()],
        };
        let edges = vec![edge("person_karna", &lone_kill)];
        let graph = GraphStore::from_records(vec![karna], vec![lone_kill], edges)
            .unwrap_or_else(|err| panic!("fixture graph must load: {err}"));
        let query_plan = plan("Who killed Karna?", graph.registry());
        let result = execute(&query_plan, &graph);
        assert!(!result.found);
        assert!(result.constraints_applied.contains(&"agent_required".to_string()));
    }

    #[test]
    fn execute_is_deterministic() {
        let graph = s1_graph();
        let query_plan = plan("Who killed Karna?", graph.registry());
        let first = execute(&query_plan, &graph);
        let second = execute(&query_plan, &graph);
        assert_eq!(first.matched_events, second.matched_events);
        assert_eq!(first.trace, second.trace);
        assert_eq!(first.found, second.found);
    }
}
