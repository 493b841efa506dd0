// crates/itihasa-system-tests/src/lib.rs
// ============================================================================
// Module: Itihasa System Test Fixtures
// Description: Hand-built fixture graphs for the S1-S6 end-to-end scenarios
//              from the testable-properties section.
// Purpose: Give the `tests/` scenario files and proptest generators one
//          shared, documented set of fixture builders.
// Dependencies: itihasa-core, itihasa-graph
// ============================================================================

//! ## Overview
//! Every fixture here is grounded directly in a specification scenario
//! (`S1` through `S6`). None of these build a network connection or touch
//! the filesystem; `GraphStore::from_records` takes already-decoded
//! records, so these fixtures bypass RON parsing entirely.

#![allow(missing_docs, reason = "Fixture helpers; see the module doc comment for scope.")]

use itihasa_core::EntityKind;
use itihasa_core::EventType;
use itihasa_graph::EdgeRecord;
use itihasa_graph::EntityRecord;
use itihasa_graph::EventRecord;
use itihasa_graph::GraphStore;

/// Builds an [`EntityRecord`] with a single alias equal to its canonical
/// name, the common case for every fixture person in this crate.
pub fn person(id: &str, name: &str, event_count: u32) -> EntityRecord {
    EntityRecord {
        id: id.to_string(),
        canonical_name: name.to_string(),
        kind: EntityKind::Person,
        event_count,
        aliases: vec![name.to_string()],
    }
}

/// Builds an [`EntityRecord`] with extra aliases beyond its canonical name.
pub fn person_with_aliases(id: &str, name: &str, event_count: u32, aliases: &[&str]) -> EntityRecord {
    let mut all_aliases: Vec<String> = aliases.iter().map(|a| (*a).to_string()).collect();
    all_aliases.push(name.to_string());
    EntityRecord {
        id: id.to_string(),
        canonical_name: name.to_string(),
        kind: EntityKind::Person,
        event_count,
        aliases: all_aliases,
    }
}

/// Builds an [`EventRecord`].
pub fn event(id: &str, event_type: EventType, sentence: &str, participants: &[&str]) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        event_type,
        tier: event_type.tier(),
        sentence: sentence.to_string(),
        participants: participants.iter().map(|p| (*p).to_string()).collect(),
    }
}

/// Builds the edges implied by an event's participant list; redundant
/// with the event record but required by `GraphStore::load`'s
/// edge/participant consistency check.
pub fn edges_for(event: &EventRecord) -> Vec<EdgeRecord> {
    event
        .participants
        .iter()
        .map(|source| EdgeRecord {
            source: source.clone(),
            relation: "PARTICIPATED_IN".to_string(),
            target: event.id.clone(),
            evidence: event.sentence.clone(),
        })
        .collect()
}

/// Builds a [`GraphStore`] from entities plus a set of events, deriving
/// every edge from each event's participant list.
#[allow(clippy::panic, reason = "Fixture construction failure is a test-authoring bug, not a runtime path.")]
pub fn build_graph(entities: Vec<EntityRecord>, events: Vec<EventRecord>) -> GraphStore {
    let edges: Vec<EdgeRecord> = events.iter().flat_map(edges_for).collect();
    GraphStore::from_records(entities, events, edges)
        .unwrap_or_else(|err| panic!("fixture graph must load: {err}"))
}

/// S1: "Who killed Karna?" — Arjuna killed Karna, Karna later died.
pub fn s1_graph() -> GraphStore {
    build_graph(
        vec![person("person_karna", "karna", 2), person("person_arjuna", "arjuna", 1)],
        vec![
            event("E500", EventType::Kill, "Arjuna killed Karna.", &["person_arjuna", "person_karna"]),
            event("E600", EventType::Death, "Karna died.", &["person_karna"]),
        ],
    )
}

/// S2: "What happened after Abhimanyu's death?" — a death followed by a
/// run of battle events.
pub fn s2_graph() -> GraphStore {
    let mut entities = vec![person("person_abhimanyu", "abhimanyu", 1)];
    let mut events =
        vec![event("E700", EventType::Death, "Abhimanyu fell.", &["person_abhimanyu"])];
    for (index, suffix) in (710..=714).enumerate() {
        let warrior_id = format!("person_warrior{index}");
        entities.push(person(&warrior_id, &format!("warrior{index}"), 1));
        events.push(EventRecord {
            id: format!("E{suffix}"),
            event_type: EventType::Battle,
            tier: EventType::Battle.tier(),
            sentence: "The battle raged on.".to_string(),
            participants: vec![warrior_id],
        });
    }
    build_graph(entities, events)
}

/// S3: "Why did Bhishma support Duryodhana?" — a vow precedes a support
/// event by the same agent.
pub fn s3_graph() -> GraphStore {
    build_graph(
        vec![person("person_bhishma", "bhishma", 2), person("person_duryodhana", "duryodhana", 1)],
        vec![
            event("E100", EventType::Vow, "Bhishma vowed loyalty.", &["person_bhishma"]),
            event(
                "E400",
                EventType::Supported,
                "Bhishma supported Duryodhana.",
                &["person_bhishma", "person_duryodhana"],
            ),
        ],
    )
}

/// S4: "Who benefited from Drona's death?" — Dhristadyumna kills Drona;
/// Yudhishthira then appoints Dhristadyumna (a benefit); Dhristadyumna is
/// also drawn into a later battle, which Phase 2 must exclude even though
/// it is one of his own incident events (property 8).
pub fn s4_graph() -> GraphStore {
    build_graph(
        vec![
            person("person_drona", "drona", 1),
            person("person_dhristadyumna", "dhristadyumna", 3),
            person("person_yudhishthira", "yudhishthira", 1),
            person("person_x", "entityx", 1),
        ],
        vec![
            event(
                "E200",
                EventType::Death,
                "Dhristadyumna slew Drona.",
                &["person_dhristadyumna", "person_drona"],
            ),
            event(
                "E210",
                EventType::AppointedAs,
                "Yudhishthira appointed Dhristadyumna.",
                &["person_yudhishthira", "person_dhristadyumna"],
            ),
            event(
                "E212",
                EventType::Battle,
                "Dhristadyumna fought on.",
                &["person_dhristadyumna", "person_x"],
            ),
        ],
    )
}

/// S6: a seed with exactly one KILL event of a single participant; under
/// `agent_required` the event must be rejected.
pub fn s6_graph() -> GraphStore {
    build_graph(
        vec![person("person_karna", "karna", 1)],
        vec![event("E900", EventType::Kill, "Karna struck alone.", &["person_karna"])],
    )
}
