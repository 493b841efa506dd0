// crates/itihasa-resolver/src/temporal.rs
// ============================================================================
// Module: Itihasa TEMPORAL Resolver
// Description: Reduces TEMPORAL matched events to an ordered EVENT_LIST
//              relative to a seed-anchored event.
// Purpose: Answer "what happened before/after X" questions.
// Dependencies: itihasa-core, itihasa-executor, itihasa-planner
// ============================================================================

use itihasa_core::Confidence;
use itihasa_core::EventType;
use itihasa_core::Trace;
use itihasa_executor::QueryResult;
use itihasa_planner::QueryPlan;
use itihasa_planner::TemporalOrder;

use crate::answer::Answer;
use crate::answer::AnsweredEvent;
use crate::answer::AnswerPayload;

/// Maximum number of events returned in a TEMPORAL answer.
const MAX_EVENTS: usize = 5;

/// Resolves a TEMPORAL query result into an ordered EVENT_LIST answer.
#[must_use]
pub(crate) fn resolve(plan: &QueryPlan, result: &QueryResult) -> Answer {
    let mut trace = Trace::new();

    let Some(order) = plan.constraints.temporal_order else {
        trace.push("[TEMPORAL/RESOLVE] no temporal_order on plan".to_string());
        return Answer::no_answer(trace);
    };

    let anchor = result
        .matched_events
        .iter()
        .filter(|event| matches!(event.event_type, EventType::Death | EventType::Battle))
        .filter(|event| event.participants.iter().any(|p| result.resolved_seeds.contains(p)))
        .min_by_key(|event| event.id);

    let Some(anchor) = anchor else {
        trace.push("[TEMPORAL/RESOLVE] no anchor event found".to_string());
        return Answer::no_answer(trace);
    };
    trace.push(format!("[TEMPORAL/RESOLVE] anchor event={}", anchor.id));

    let mut filtered: Vec<_> = result
        .matched_events
        .iter()
        .filter(|event| match order {
            TemporalOrder::Before => event.id < anchor.id,
            TemporalOrder::After => event.id > anchor.id,
            TemporalOrder::During => true,
        })
        .collect();

    match order {
        TemporalOrder::Before => filtered.sort_by(|a, b| b.id.cmp(&a.id)),
        TemporalOrder::After | TemporalOrder::During => filtered.sort_by_key(|event| event.id),
    }
    filtered.truncate(MAX_EVENTS);

    for event in &filtered {
        trace.push(format!("[TEMPORAL/RESOLVE] include event={}", event.id));
    }

    let supporting_event_ids = filtered.iter().map(|event| event.id).collect();
    let events: Vec<AnsweredEvent> = filtered
        .iter()
        .map(|event| AnsweredEvent {
            id: event.id,
            event_type: event.event_type,
            sentence: event.sentence.clone(),
        })
        .collect();

    if events.is_empty() {
        trace.push("[TEMPORAL/RESOLVE] no events satisfy the temporal relation".to_string());
        return Answer::no_answer(trace);
    }

    Answer {
        payload: AnswerPayload::EventList { events },
        confidence: Confidence::Medium,
        supporting_event_ids,
        trace,
    }
}
