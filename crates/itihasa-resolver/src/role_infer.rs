// crates/itihasa-resolver/src/role_infer.rs
// ============================================================================
// Module: Itihasa Resolver Role Inference
// Description: Applies the core role-position table to a matched event's
//              participant list and resolves the kind of the chosen
//              participant.
// Purpose: Shared AGENT/PATIENT extraction used by all four sub-resolvers.
// Dependencies: itihasa-core, itihasa-executor
// ============================================================================

//! ## Overview
//! The graph stores no explicit roles (see [`itihasa_core::role_positions`]).
//! This module applies that static table to a specific [`MatchedEvent`],
//! then looks the chosen participant's kind up in `matched_entities` so
//! callers can restrict by kind (e.g. "the FACT answer's agent must be a
//! PERSON"). A rejection for kind mismatch is the caller's responsibility
//! to trace — this module does not itself write to a [`Trace`].

use itihasa_core::EntityId;
use itihasa_core::EntityKind;
use itihasa_core::Role;
use itihasa_core::role_positions;
use itihasa_executor::MatchedEntity;
use itihasa_executor::MatchedEvent;

/// Looks up a participant's kind among the result's matched entities.
fn kind_of<'a>(entities: &'a [MatchedEntity], id: &EntityId) -> Option<&'a EntityKind> {
    entities.iter().find(|entity| &entity.id == id).map(|entity| &entity.kind)
}

/// Returns `(agent_id, patient_id)` for a matched event, per the static
/// role table. Every [`itihasa_core::EventType`] variant has a table
/// entry (`itihasa_core::fallback_role_positions` exists only for a type
/// absent from the table, which cannot currently occur), so this never
/// needs the participant-count fallback.
#[must_use]
pub(crate) fn infer_roles(event: &MatchedEvent) -> (Option<EntityId>, Option<EntityId>) {
    let (first_role, second_role) = role_positions(event.event_type);

    let mut agent = None;
    let mut patient = None;
    if let Some(first) = event.participants.first() {
        match first_role {
            Role::Agent => agent = Some(first.clone()),
            Role::Patient => patient = Some(first.clone()),
        }
    }
    if let Some(second) = event.participants.get(1) {
        if let Some(role) = second_role {
            match role {
                Role::Agent => agent = Some(second.clone()),
                Role::Patient => patient = Some(second.clone()),
            }
        }
    }
    (agent, patient)
}

/// Returns the inferred agent's id, restricted to [`EntityKind::Person`].
/// Returns `None` if no agent role applies, or the agent is not a person.
#[must_use]
pub(crate) fn agent_person(event: &MatchedEvent, entities: &[MatchedEntity]) -> Option<EntityId> {
    let (agent, _) = infer_roles(event);
    let agent = agent?;
    match kind_of(entities, &agent) {
        Some(EntityKind::Person) => Some(agent),
        _ => None,
    }
}

/// Returns the inferred patient's id, restricted to [`EntityKind::Person`].
#[must_use]
pub(crate) fn patient_person(event: &MatchedEvent, entities: &[MatchedEntity]) -> Option<EntityId> {
    let (_, patient) = infer_roles(event);
    let patient = patient?;
    match kind_of(entities, &patient) {
        Some(EntityKind::Person) => Some(patient),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use itihasa_core::EventType;
    use itihasa_core::Tier;
    use itihasa_executor::MatchedEvent;

    use super::infer_roles;

    #[test]
    fn kill_first_is_agent_second_is_patient() {
        let event = MatchedEvent {
            id: itihasa_core::EventId::from_suffix(1),
            tier: Tier::Macro,
            event_type: EventType::Kill,
            participants: vec!["person_a".into(), "person_b".into()],
            sentence: "a killed b".to_string(),
        };
        let (agent, patient) = infer_roles(&event);
        assert_eq!(agent.as_ref().map(|e| e.as_str()), Some("person_a"));
        assert_eq!(patient.as_ref().map(|e| e.as_str()), Some("person_b"));
    }

    #[test]
    fn death_has_no_agent() {
        let event = MatchedEvent {
            id: itihasa_core::EventId::from_suffix(2),
            tier: Tier::Macro,
            event_type: EventType::Death,
            participants: vec!["person_a".into()],
            sentence: "a died".to_string(),
        };
        let (agent, patient) = infer_roles(&event);
        assert_eq!(agent, None);
        assert_eq!(patient.as_ref().map(|e| e.as_str()), Some("person_a"));
    }
}
