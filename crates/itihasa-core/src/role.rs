// crates/itihasa-core/src/role.rs
// ============================================================================
// Module: Itihasa Role Inference
// Description: Narrative role assigned to an event participant by position.
// Purpose: Provide the shared (AGENT, PATIENT) vocabulary used by the
//          resolver's role-inference table.
// Dependencies: crate::event_type
// ============================================================================

//! ## Overview
//! The graph stores no explicit roles. Role is inferred from event type and
//! participant position, per the static table in [`role_positions`]. The
//! first-participant-is-AGENT rule is approximately 80% correct by
//! construction of the upstream corpus; callers must surface the inferred
//! role in the trace rather than silently "fixing" an answer (see the
//! resolver crate).

use crate::event_type::EventType;

// ============================================================================
// SECTION: Role
// ============================================================================

/// An inferred narrative role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The entity that acts.
    Agent,
    /// The entity acted upon.
    Patient,
}

// ============================================================================
// SECTION: Role Table
// ============================================================================

/// Returns the static (position-1, position-2) role mapping for an event
/// type, where `None` means that position has no defined role.
///
/// Types absent from the explicit table fall back to `(Agent, Patient)`
/// when the caller reports two or more participants exist, else
/// `(Patient, None)` — that decision is the caller's, since it depends on
/// the participant count rather than the type alone.
#[must_use]
pub const fn role_positions(event_type: EventType) -> (Role, Option<Role>) {
    match event_type {
        EventType::Kill
        | EventType::Battle
        | EventType::Coronation
        | EventType::Supported
        | EventType::Defended
        | EventType::Boon
        | EventType::Curse
        | EventType::AppointedAs
        | EventType::Command
        | EventType::Rescued => (Role::Agent, Some(Role::Patient)),
        EventType::Death => (Role::Patient, None),
        EventType::Vow => (Role::Agent, None),
        EventType::EngagedInBattle
        | EventType::Defeated
        | EventType::Protected
        | EventType::Pursued
        | EventType::Abandoned
        | EventType::Attacked
        | EventType::Retreated
        | EventType::Surrounded => (Role::Agent, Some(Role::Patient)),
    }
}

/// Fallback role mapping for a type with no explicit table entry, based on
/// participant count. Present for completeness: every [`EventType`]
/// variant is currently covered by [`role_positions`], so this is only
/// exercised if the vocabulary grows without a matching table update.
#[must_use]
pub const fn fallback_role_positions(participant_count: usize) -> (Role, Option<Role>) {
    if participant_count >= 2 {
        (Role::Agent, Some(Role::Patient))
    } else {
        (Role::Patient, None)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Role;
    use super::role_positions;
    use crate::event_type::EventType;

    #[test]
    fn kill_is_agent_patient() {
        assert_eq!(role_positions(EventType::Kill), (Role::Agent, Some(Role::Patient)));
    }

    #[test]
    fn death_is_patient_only() {
        assert_eq!(role_positions(EventType::Death), (Role::Patient, None));
    }

    #[test]
    fn vow_is_agent_only() {
        assert_eq!(role_positions(EventType::Vow), (Role::Agent, None));
    }

    #[test]
    fn every_event_type_has_a_mapping() {
        for event_type in EventType::ALL {
            let (_, _) = role_positions(event_type);
        }
    }
}
