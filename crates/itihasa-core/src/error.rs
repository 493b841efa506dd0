// crates/itihasa-core/src/error.rs
// ============================================================================
// Module: Itihasa Invariant Violations
// Description: Fatal, should-be-impossible failure surfaced after load.
// Purpose: Give the executor a typed, propagated failure for conditions
//          load-time validation is supposed to have already ruled out.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`InvariantViolation`] is never expected in practice: load validation in
//! the graph crate rules out dangling participant ids, and the executor's
//! depth checks are structural (checked before enqueue, not after). It
//! exists so that if an invariant is ever broken, the failure is a typed
//! value propagated to the caller rather than a panic or silent
//! misbehavior, per the "never silenced" requirement on fatal conditions.

use std::fmt;

/// A broken invariant that load-time validation should have prevented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// An event referenced an entity id absent from the loaded entity set.
    DanglingParticipant {
        /// The event that referenced the missing entity.
        event: String,
        /// The missing entity id.
        entity: String,
    },
    /// A traversal depth counter exceeded the plan's declared depth.
    DepthExceeded {
        /// The plan's declared traversal depth.
        declared: u8,
        /// The depth actually reached.
        reached: u8,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingParticipant { event, entity } => {
                write!(f, "event {event} references unknown entity {entity}")
            }
            Self::DepthExceeded { declared, reached } => {
                write!(f, "traversal depth {reached} exceeded declared depth {declared}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
