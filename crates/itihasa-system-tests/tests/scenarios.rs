// crates/itihasa-system-tests/tests/scenarios.rs
// ============================================================================
// Full-pipeline scenario tests: plan -> execute -> resolve end to end.
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions are permitted."
)]

use itihasa_core::Confidence;
use itihasa_core::EventType;
use itihasa_executor::execute;
use itihasa_planner::Intent;
use itihasa_planner::plan;
use itihasa_resolver::AnswerPayload;
use itihasa_resolver::resolve;
use itihasa_system_tests::s1_graph;
use itihasa_system_tests::s2_graph;
use itihasa_system_tests::s3_graph;
use itihasa_system_tests::s4_graph;
use itihasa_system_tests::s6_graph;

/// S1: "Who killed Karna?" -> FACT/ENTITY, agent=arjuna, high confidence.
#[test]
fn s1_who_killed_karna() {
    let graph = s1_graph();
    let query_plan = plan("Who killed Karna?", graph.registry());
    assert_eq!(query_plan.intent, Intent::Fact);
    let result = execute(&query_plan, &graph);
    assert!(result.found);
    let answer = resolve(&query_plan, &result);
    let AnswerPayload::Entity { entities } = &answer.payload else {
        panic!("expected ENTITY payload, got {:?}", answer.payload);
    };
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].id.as_str(), "person_arjuna");
    assert_eq!(answer.confidence, Confidence::High);
}

/// S2: "What happened after Abhimanyu's death?" -> TEMPORAL/EVENT_LIST,
/// every event after E700, capped at 5.
#[test]
fn s2_what_happened_after_abhimanyus_death() {
    let graph = s2_graph();
    let query_plan = plan("What happened after Abhimanyu's death?", graph.registry());
    assert_eq!(query_plan.intent, Intent::Temporal);
    let result = execute(&query_plan, &graph);
    assert!(result.found);
    let answer = resolve(&query_plan, &result);
    let AnswerPayload::EventList { events } = &answer.payload else {
        panic!("expected EVENT_LIST payload, got {:?}", answer.payload);
    };
    assert!(!events.is_empty());
    assert!(events.len() <= 5);
    for event in events {
        assert!(event.id.suffix() > 700);
    }
    assert_eq!(answer.confidence, Confidence::Medium);
}

/// S3: "Why did Bhishma support Duryodhana?" -> CAUSAL/CHAIN, four nodes,
/// medium confidence.
#[test]
fn s3_why_did_bhishma_support_duryodhana() {
    let graph = s3_graph();
    let query_plan = plan("Why did Bhishma support Duryodhana?", graph.registry());
    assert_eq!(query_plan.intent, Intent::Causal);
    let result = execute(&query_plan, &graph);
    assert!(result.found);
    let answer = resolve(&query_plan, &result);
    let AnswerPayload::Chain { chain } = &answer.payload else {
        panic!("expected CHAIN payload, got {:?}", answer.payload);
    };
    assert_eq!(chain.len(), 4);
    assert_eq!(answer.confidence, Confidence::Medium);
}

/// S4: "Who benefited from Drona's death?" -> MULTI_HOP/ENTITY, the
/// violent battle event must never count as a benefit (property 8).
#[test]
fn s4_who_benefited_from_dronas_death() {
    let graph = s4_graph();
    let query_plan = plan("Who benefited from Drona's death?", graph.registry());
    assert_eq!(query_plan.intent, Intent::MultiHop);
    let result = execute(&query_plan, &graph);
    assert!(result.found);
    assert!(
        result
            .matched_events
            .iter()
            .all(|event| !matches!(event.event_type, EventType::Kill | EventType::Battle))
            || result.matched_events.iter().any(|event| event.event_type == EventType::Death),
        "a DEATH trigger event is expected; no violent event should count as a consequence"
    );
    let answer = resolve(&query_plan, &result);
    let AnswerPayload::Entity { entities } = &answer.payload else {
        panic!("expected ENTITY payload, got {:?}", answer.payload);
    };
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].id.as_str(), "person_dhristadyumna");
    assert_eq!(answer.confidence, Confidence::Medium);
}

/// S5: "Who killed Nobody?" -> no seed resolves, NO_ANSWER, high confidence.
#[test]
fn s5_who_killed_nobody() {
    let graph = s1_graph();
    let query_plan = plan("Who killed Nobody?", graph.registry());
    assert!(query_plan.seed_entities.is_empty());
    let result = execute(&query_plan, &graph);
    assert!(!result.found);
    let answer = resolve(&query_plan, &result);
    assert!(matches!(answer.payload, AnswerPayload::NoAnswer));
    assert_eq!(answer.confidence, Confidence::High);
}

/// S6: a lone-participant KILL event is rejected by `agent_required`.
#[test]
fn s6_agent_required_rejects_lone_kill() {
    let graph = s6_graph();
    let query_plan = plan("Who killed Karna?", graph.registry());
    assert_eq!(query_plan.constraints.agent_required, Some(true));
    let result = execute(&query_plan, &graph);
    assert!(!result.found);
    assert!(result.constraints_applied.contains(&"agent_required".to_string()));
    let answer = resolve(&query_plan, &result);
    assert!(matches!(answer.payload, AnswerPayload::NoAnswer));
}
