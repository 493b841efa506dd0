// crates/itihasa-resolver/src/lib.rs
// ============================================================================
// Module: Itihasa Answer Resolver Library
// Description: Pure reduction of a Query Result to a structured Answer.
// Purpose: Dispatch by intent into one of four sub-resolvers; no further
//          graph access beyond the matched-event and matched-entity
//          collections already carried by the Query Result.
// Dependencies: itihasa-core, itihasa-executor, itihasa-planner
// ============================================================================

//! ## Overview
//! [`resolve`] never throws. On empty or incoherent input it returns the
//! `NO_ANSWER` variant with `confidence=high` — "we are sure we have no
//! answer" — per the specification. Each intent gets its own reduction
//! module; this crate root only dispatches and defines the shared
//! [`Answer`] and role-inference types.

mod answer;
mod causal;
mod fact;
mod multi_hop;
mod role_infer;
mod temporal;

pub use answer::Answer;
pub use answer::AnsweredEvent;
pub use answer::AnswerPayload;
pub use answer::ChainNode;
pub use answer::RankedEntity;

use itihasa_core::Trace;
use itihasa_executor::QueryResult;
use itihasa_planner::Intent;
use itihasa_planner::QueryPlan;

/// Reduces a [`QueryResult`] to a structured [`Answer`], dispatching by
/// `plan.intent`. Never throws.
#[must_use]
pub fn resolve(plan: &QueryPlan, result: &QueryResult) -> Answer {
    if result.matched_events.is_empty() {
        let mut trace = Trace::new();
        trace.push("[RESOLVE] matched_events is empty".to_string());
        return Answer::no_answer(trace);
    }

    match plan.intent {
        Intent::Fact => fact::resolve(plan, result),
        Intent::Temporal => temporal::resolve(plan, result),
        Intent::Causal => causal::resolve(plan, result),
        Intent::MultiHop => multi_hop::resolve(plan, result),
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
    use itihasa_executor::execute;
    use itihasa_graph::EdgeRecord;
    use itihasa_graph::EntityRecord;
    use itihasa_graph::EventRecord;
    use itihasa_graph::GraphStore;
    use itihasa_planner::plan;

    use super::resolve;
    use crate::AnswerPayload;
    use crate::answer::Answer;

    fn edge(source: &str, event: &EventRecord) -> EdgeRecord {
        EdgeRecord {
            source: source.to_string(),
            relation: "PARTICIPATED_IN".to_string(),
            target: event.id.clone(),
            evidence: event.sentence.clone(),
        }
    }

    #[test]
    fn s1_who_killed_karna_returns_arjuna_high_confidence() {
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
        let edges =
            vec![edge("person_arjuna", &kill), edge("person_karna", &kill), edge("person_karna", &death)];
        let graph = GraphStore::from_records(vec![karna, arjuna], vec![kill, death], edges)
            .unwrap_or_else(|err| panic!("fixture graph must load: {err}"));

        let query_plan = plan("Who killed Karna?", graph.registry());
        let result = execute(&query_plan, &graph);
        let answer = resolve(&query_plan, &result);

        let AnswerPayload::Entity { entities } = &answer.payload else {
            panic!("expected ENTITY payload, got {:?}", answer.payload);
        };
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id.as_str(), "person_arjuna");
        assert_eq!(answer.confidence, itihasa_core::Confidence::High);
    }

    #[test]
    fn s5_nobody_yields_no_answer_high_confidence() {
        let karna = EntityRecord {
            id: "person_karna".to_string(),
            canonical_name: "karna".to_string(),
            kind: EntityKind::Person,
            event_count: 0,
            aliases: vec!["karna".to_string()],
        };
        let graph = GraphStore::from_records(vec![karna], vec![], vec![])
            .unwrap_or_else(|err| panic!("fixture graph must load: {err}"));
        let query_plan = plan("Who killed Nobody?", graph.registry());
        let result = execute(&query_plan, &graph);
        let answer = resolve(&query_plan, &result);
        assert!(matches!(answer.payload, AnswerPayload::NoAnswer));
        assert_eq!(answer.confidence, itihasa_core::Confidence::High);
    }

    #[test]
    fn resolve_is_idempotent() {
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
        let edges = vec![edge("person_arjuna", &kill), edge("person_karna", &kill)];
        let graph = GraphStore::from_records(vec![karna, arjuna], vec![kill], edges)
            .unwrap_or_else(|err| panic!("fixture graph must load: {err}"));
        let query_plan = plan("Who killed Karna?", graph.registry());
        let result = execute(&query_plan, &graph);
        let first: Answer = resolve(&query_plan, &result);
        let second: Answer = resolve(&query_plan, &result);
        assert_eq!(first.payload, second.payload);
        assert_eq!(first.confidence, second.confidence);
    }
}
