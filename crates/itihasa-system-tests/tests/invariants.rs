// crates/itihasa-system-tests/tests/invariants.rs
// ============================================================================
// Cross-cutting invariants the full pipeline must uphold, independent of
// any single scenario.
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions are permitted."
)]

use itihasa_core::EntityKind;
use itihasa_core::EventType;
use itihasa_executor::execute;
use itihasa_graph::GraphStore;
use itihasa_graph::LoadError;
use itihasa_planner::plan;
use itihasa_resolver::AnswerPayload;
use itihasa_resolver::ChainNode;
use itihasa_resolver::resolve;
use itihasa_system_tests::build_graph;
use itihasa_system_tests::event;
use itihasa_system_tests::person;
use itihasa_system_tests::person_with_aliases;
use itihasa_system_tests::s1_graph;
use itihasa_system_tests::s2_graph;
use itihasa_system_tests::s3_graph;
use itihasa_system_tests::s4_graph;
use itihasa_system_tests::s6_graph;

/// 1. Alias uniqueness: a collision between two entities' aliases fails
/// `GraphStore::load`, never silently resolves to one winner.
#[test]
fn alias_collision_is_rejected_at_load() {
    let karna = person("person_karna", "karna", 0);
    let duplicate = person_with_aliases("person_other", "someone", 0, &["karna"]);
    let result = GraphStore::from_records(vec![karna, duplicate], vec![], vec![]);
    assert!(matches!(result, Err(LoadError::AliasCollision { .. })));
}

/// 2. Edge/participant consistency: an edge whose source is not among its
/// target event's participants fails to load.
#[test]
fn edge_participant_mismatch_is_rejected_at_load() {
    let karna = person("person_karna", "karna", 0);
    let outsider = person("person_outsider", "outsider", 0);
    let death = event("E600", EventType::Death, "Karna died.", &["person_karna"]);
    let bad_edge = itihasa_graph::EdgeRecord {
        source: "person_outsider".to_string(),
        relation: "PARTICIPATED_IN".to_string(),
        target: "E600".to_string(),
        evidence: "Karna died.".to_string(),
    };
    let result = GraphStore::from_records(vec![karna, outsider], vec![death], vec![bad_edge]);
    assert!(matches!(result, Err(LoadError::EdgeParticipantMismatch { .. })));
}

/// 3. Monotone event ids: `events_incident_to` returns ids sorted
/// ascending by integer suffix, regardless of insertion order.
#[test]
fn events_incident_to_is_sorted_ascending() {
    let karna = person("person_karna", "karna", 0);
    let late = event("E900", EventType::Battle, "A late battle.", &["person_karna"]);
    let early = event("E100", EventType::Vow, "An early vow.", &["person_karna"]);
    let graph = build_graph(vec![karna], vec![late, early]);
    let incident = graph
        .events_incident_to(&itihasa_core::EntityId::new("person_karna"))
        .expect("entity exists");
    assert_eq!(incident, [itihasa_core::EventId::from_suffix(100), itihasa_core::EventId::from_suffix(900)]);
}

/// 4. Determinism: repeated `plan`/`execute`/`resolve` on the same inputs
/// are byte-identical modulo the elapsed-time field.
#[test]
fn full_pipeline_is_deterministic() {
    let graph = s1_graph();
    let plan_a = plan("Who killed Karna?", graph.registry());
    let plan_b = plan("Who killed Karna?", graph.registry());
    assert_eq!(plan_a, plan_b);

    let result_a = execute(&plan_a, &graph);
    let result_b = execute(&plan_b, &graph);
    assert_eq!(result_a.matched_events, result_b.matched_events);
    assert_eq!(result_a.matched_entities, result_b.matched_entities);
    assert_eq!(result_a.trace, result_b.trace);
    assert_eq!(result_a.found, result_b.found);

    let answer_a = resolve(&plan_a, &result_a);
    let answer_b = resolve(&plan_b, &result_b);
    assert_eq!(answer_a, answer_b);
}

/// 5. Depth bound: no traversal ever reports a deeper level than the
/// plan's declared `traversal_depth`, across every intent.
#[test]
fn traversal_never_exceeds_declared_depth() {
    for (question, graph) in [
        ("Who killed Karna?", s1_graph()),
        ("What happened after Abhimanyu's death?", s2_graph()),
        ("Why did Bhishma support Duryodhana?", s3_graph()),
        ("Who benefited from Drona's death?", s4_graph()),
    ] {
        let query_plan = plan(question, graph.registry());
        let result = execute(&query_plan, &graph);
        assert!(
            result.traversal_stats.max_depth_reached <= query_plan.traversal_depth,
            "question {question:?}: depth {} exceeds plan depth {}",
            result.traversal_stats.max_depth_reached,
            query_plan.traversal_depth
        );
    }
}

/// 6. Groundedness: every supporting event id exists in the graph, and
/// every entity id in an ENTITY or CHAIN payload is a PERSON.
#[test]
fn answers_are_grounded_in_the_graph() {
    for (question, graph) in
        [("Who killed Karna?", s1_graph()), ("Why did Bhishma support Duryodhana?", s3_graph())]
    {
        let query_plan = plan(question, graph.registry());
        let result = execute(&query_plan, &graph);
        let answer = resolve(&query_plan, &result);

        for event_id in &answer.supporting_event_ids {
            assert!(graph.event_by_id(*event_id).is_ok(), "supporting event {event_id} must exist");
        }

        match &answer.payload {
            AnswerPayload::Entity { entities } => {
                for ranked in entities {
                    let entity = graph.entity_by_id(&ranked.id).expect("entity must exist");
                    assert_eq!(entity.kind, EntityKind::Person);
                }
            }
            AnswerPayload::Chain { chain } => {
                for node in chain {
                    if let ChainNode::Entity { id, .. } = node {
                        let entity = graph.entity_by_id(id).expect("entity must exist");
                        assert_eq!(entity.kind, EntityKind::Person);
                    }
                }
            }
            AnswerPayload::EventList { .. } | AnswerPayload::NoAnswer => {}
        }
    }
}

/// 7. Constraint honesty: when `agent_required` holds for a FACT query,
/// every matched event has at least two participants.
#[test]
fn agent_required_constraint_holds_for_every_matched_event() {
    let graph = s1_graph();
    let query_plan = plan("Who killed Karna?", graph.registry());
    assert_eq!(query_plan.constraints.agent_required, Some(true));
    let result = execute(&query_plan, &graph);
    for matched in &result.matched_events {
        assert!(matched.participants.len() >= 2);
    }
}

/// 8. MULTI_HOP exclusion rule: no KILL, DEATH, or BATTLE event is ever
/// counted among the consequence (Phase 2) events of a MULTI_HOP result.
#[test]
fn multi_hop_never_counts_violence_as_a_consequence() {
    let graph = s4_graph();
    let query_plan = plan("Who benefited from Drona's death?", graph.registry());
    let result = execute(&query_plan, &graph);
    let triggers: Vec<_> = result
        .matched_events
        .iter()
        .filter(|event| matches!(event.event_type, EventType::Kill | EventType::Death))
        .collect();
    let non_triggers: Vec<_> = result
        .matched_events
        .iter()
        .filter(|event| !matches!(event.event_type, EventType::Kill | EventType::Death))
        .collect();
    assert!(!triggers.is_empty());
    for consequence in non_triggers {
        assert!(!matches!(
            consequence.event_type,
            EventType::Kill | EventType::Death | EventType::Battle
        ));
    }
}

/// 9. NO_ANSWER safety: an empty matched-event set always yields
/// `NO_ANSWER` with `confidence=high`.
#[test]
fn empty_matched_events_always_yields_high_confidence_no_answer() {
    let graph = s6_graph();
    let query_plan = plan("Who killed Karna?", graph.registry());
    let result = execute(&query_plan, &graph);
    assert!(result.matched_events.is_empty());
    let answer = resolve(&query_plan, &result);
    assert!(matches!(answer.payload, AnswerPayload::NoAnswer));
    assert_eq!(answer.confidence, itihasa_core::Confidence::High);
}

/// 10. Idempotence: `resolve(plan, execute(plan, graph))` yields an
/// identical answer across repeated invocation on the same inputs.
#[test]
fn resolve_of_execute_is_idempotent() {
    let graph = s3_graph();
    let query_plan = plan("Why did Bhishma support Duryodhana?", graph.registry());
    let result = execute(&query_plan, &graph);
    let first = resolve(&query_plan, &result);
    let second = resolve(&query_plan, &result);
    assert_eq!(first, second);
}
