// crates/itihasa-resolver/src/fact.rs
// ============================================================================
// Module: Itihasa FACT Resolver
// Description: Reduces FACT matched events to a ranked-agent ENTITY answer.
// Purpose: Answer "who did X" questions by inferring and ranking the AGENT
//          of each qualifying event.
// Dependencies: itihasa-core, itihasa-executor, itihasa-planner
// ============================================================================

use std::collections::HashMap;

use itihasa_core::Confidence;
use itihasa_core::EntityId;
use itihasa_core::Trace;
use itihasa_executor::MatchedEvent;
use itihasa_executor::QueryResult;
use itihasa_planner::QueryPlan;

use crate::answer::Answer;
use crate::answer::AnswerPayload;
use crate::answer::RankedEntity;
use crate::role_infer::agent_person;

/// Maximum number of agents returned in a FACT answer.
const MAX_AGENTS: usize = 2;

/// Resolves a FACT query result into a ranked-agent ENTITY answer.
#[must_use]
pub(crate) fn resolve(plan: &QueryPlan, result: &QueryResult) -> Answer {
    let mut trace = Trace::new();
    let agent_required = plan.constraints.agent_required.unwrap_or(false);

    let qualifying: Vec<&MatchedEvent> = result
        .matched_events
        .iter()
        .filter(|event| {
            let type_ok =
                plan.target_event_types.is_empty() || plan.target_event_types.contains(&event.event_type);
            if !type_ok {
                trace.push(format!("[FACT/RESOLVE] drop event={} reason=type-not-targeted", event.id));
                return false;
            }
            if agent_required && event.participants.len() < 2 {
                trace.push(format!("[FACT/RESOLVE] drop event={} reason=agent-required", event.id));
                return false;
            }
            true
        })
        .collect();

    let mut frequency: HashMap<EntityId, u32> = HashMap::new();
    let mut supporting: HashMap<EntityId, Vec<itihasa_core::EventId>> = HashMap::new();
    for event in &qualifying {
        match agent_person(event, &result.matched_entities) {
            Some(agent) => {
                trace.push(format!("[FACT/RESOLVE] agent={agent} event={}", event.id));
                *frequency.entry(agent.clone()).or_insert(0) += 1;
                supporting.entry(agent).or_default().push(event.id);
            }
            None => {
                trace.push(format!("[FACT/RESOLVE] drop event={} reason=no-person-agent", event.id));
            }
        }
    }

    if frequency.is_empty() {
        trace.push("[FACT/RESOLVE] no agents remain".to_string());
        return Answer::no_answer(trace);
    }

    let incident_count = |id: &EntityId| -> u32 {
        result
            .matched_entities
            .iter()
            .find(|entity| &entity.id == id)
            .map_or(0, |entity| entity.incident_event_count)
    };

    let mut ranked: Vec<EntityId> = frequency.keys().cloned().collect();
    ranked.sort_by(|a, b| {
        frequency[b]
            .cmp(&frequency[a])
            .then_with(|| incident_count(b).cmp(&incident_count(a)))
            .then_with(|| a.cmp(b))
    });

    let distinct_count = ranked.len();
    let top: Vec<EntityId> = ranked.into_iter().take(MAX_AGENTS).collect();

    let entities: Vec<RankedEntity> = top
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

    let supporting_event_ids: Vec<itihasa_core::EventId> =
        top.iter().flat_map(|id| supporting.get(id).cloned().unwrap_or_default()).collect();

    let confidence = if distinct_count == 1 {
        Confidence::High
    } else if distinct_count <= 3 {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    Answer { payload: AnswerPayload::Entity { entities }, confidence, supporting_event_ids, trace }
}
