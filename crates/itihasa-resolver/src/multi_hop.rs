// crates/itihasa-resolver/src/multi_hop.rs
// ============================================================================
// Module: Itihasa MULTI_HOP Resolver
// Description: Reduces MULTI_HOP matched events to a ranked-beneficiary
//              ENTITY answer.
// Purpose: Answer "who benefited from X" questions without ever counting
//          further violence as a benefit.
// Dependencies: itihasa-core, itihasa-executor, itihasa-planner
// ============================================================================

use std::collections::HashMap;

use itihasa_core::Confidence;
use itihasa_core::EntityId;
use itihasa_core::EventId;
use itihasa_core::EventType;
use itihasa_core::Trace;
use itihasa_executor::MatchedEvent;
use itihasa_executor::QueryResult;
use itihasa_planner::QueryPlan;

use crate::answer::Answer;
use crate::answer::AnswerPayload;
use crate::answer::RankedEntity;
use crate::role_infer::agent_person;
use crate::role_infer::patient_person;

/// Consequence types whose benefited party is the PATIENT, not the AGENT.
const PATIENT_BENEFIT_TYPES: [EventType; 3] =
    [EventType::Boon, EventType::AppointedAs, EventType::Rescued];

/// The fixed consequence whitelist (mirrors the executor's Phase 2 set).
const CONSEQUENCE_TYPES: [EventType; 6] = [
    EventType::AppointedAs,
    EventType::Coronation,
    EventType::Boon,
    EventType::Supported,
    EventType::Command,
    EventType::Rescued,
];

/// Maximum number of beneficiaries returned in a MULTI_HOP answer.
const MAX_BENEFICIARIES: usize = 5;

/// Resolves a MULTI_HOP query result into a ranked-beneficiary ENTITY
/// answer.
#[must_use]
pub(crate) fn resolve(_plan: &QueryPlan, result: &QueryResult) -> Answer {
    let mut trace = Trace::new();

    let triggers: Vec<&MatchedEvent> = result
        .matched_events
        .iter()
        .filter(|event| matches!(event.event_type, EventType::Kill | EventType::Death))
        .filter(|event| event.participants.iter().any(|p| result.resolved_seeds.contains(p)))
        .collect();

    let consequences: Vec<&MatchedEvent> = result
        .matched_events
        .iter()
        .filter(|event| CONSEQUENCE_TYPES.contains(&event.event_type))
        .collect();

    if triggers.is_empty() {
        trace.push("[MULTI_HOP/RESOLVE] no trigger events in matched set".to_string());
        return Answer::no_answer(trace);
    }
    if consequences.is_empty() {
        trace.push("[MULTI_HOP/RESOLVE] no consequence events in matched set".to_string());
        return Answer::no_answer(trace);
    }

    let mut frequency: HashMap<EntityId, u32> = HashMap::new();
    let mut supporting: HashMap<EntityId, Vec<EventId>> = HashMap::new();
    for event in &consequences {
        let beneficiary = if PATIENT_BENEFIT_TYPES.contains(&event.event_type) {
            patient_person(event, &result.matched_entities)
        } else {
            agent_person(event, &result.matched_entities)
        };
        match beneficiary {
            Some(id) => {
                trace.push(format!("[MULTI_HOP/RESOLVE] beneficiary={id} event={}", event.id));
                *frequency.entry(id.clone()).or_insert(0) += 1;
                supporting.entry(id).or_default().push(event.id);
            }
            None => {
                trace.push(format!(
                    "[MULTI_HOP/RESOLVE] drop event={} reason=no-person-beneficiary",
                    event.id
                ));
            }
        }
    }

    if frequency.is_empty() {
        trace.push("[MULTI_HOP/RESOLVE] no beneficiaries remain".to_string());
        return Answer::no_answer(trace);
    }

    let mut ranked: Vec<EntityId> = frequency.keys().cloned().collect();
    ranked.sort_by(|a, b| frequency[b].cmp(&frequency[a]).then_with(|| a.cmp(b)));
    ranked.truncate(MAX_BENEFICIARIES);

    let entities: Vec<RankedEntity> = ranked
        .iter()
        .map(|id| {
            let name = result
                .matched_entities
                .iter()
                .find(|entity| &entity.id == id)
                .map_or_else(|| id.to_string(), |entity| entity.canonical_name.clone());
            RankedEntity { id: id.clone(), name, frequency: frequency[id] }
        })
        .collect();

    let mut supporting_event_ids: Vec<EventId> = triggers.iter().map(|event| event.id).collect();
    supporting_event_ids
        .extend(ranked.iter().flat_map(|id| supporting.get(id).cloned().unwrap_or_default()));

    Answer {
        payload: AnswerPayload::Entity { entities },
        confidence: Confidence::Medium,
        supporting_event_ids,
        trace,
    }
}
