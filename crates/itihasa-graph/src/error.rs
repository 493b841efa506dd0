// crates/itihasa-graph/src/error.rs
// ============================================================================
// Module: Itihasa Graph Errors
// Description: Fatal load errors and local, expected lookup misses.
// Purpose: Separate startup-fatal failures from per-query recoverable ones.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`LoadError`] is fatal and can only occur at startup, before any query is
//! accepted. [`NotFound`] is local and expected: the planner and executor
//! recover from it by dropping the unresolved reference and recording the
//! miss in the decision trace, never by propagating an exception.

use thiserror::Error;

// ============================================================================
// SECTION: Load Errors
// ============================================================================

/// Fatal failures produced while loading the three graph artifacts.
///
/// # Invariants
/// - Every variant is produced before any query is accepted; loading either
///   fully succeeds or the store is never constructed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required artifact file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that could not be read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// An artifact file did not parse as well-formed RON.
    #[error("failed to parse {path}: {source}")]
    Malformed {
        /// The path that failed to parse.
        path: String,
        /// Underlying parse failure.
        #[source]
        source: ron::error::SpanError,
    },
    /// An entity record's alias set omits its own canonical name.
    #[error("entity {entity} is missing its canonical name from its alias set")]
    MissingCanonicalAlias {
        /// The offending entity id.
        entity: String,
    },
    /// Two entities share a case-insensitive alias.
    #[error("alias {alias:?} is claimed by both {first} and {second}")]
    AliasCollision {
        /// The colliding alias, lowercased.
        alias: String,
        /// The entity that first claimed the alias.
        first: String,
        /// The entity that collided with it.
        second: String,
    },
    /// Two entity records share the same id.
    #[error("duplicate entity id: {0}")]
    DuplicateEntityId(String),
    /// Two event records share the same id.
    #[error("duplicate event id: {0}")]
    DuplicateEventId(String),
    /// An event's declared tier does not match its type's derived tier.
    #[error("event {event} declares tier {declared} but type {event_type} derives tier {derived}")]
    TierMismatch {
        /// The offending event id.
        event: String,
        /// The event's declared event type.
        event_type: String,
        /// The tier the event record declared.
        declared: String,
        /// The tier derived from the event type.
        derived: String,
    },
    /// An event has no participants.
    #[error("event {0} has no participants")]
    EmptyParticipants(String),
    /// An event references an entity id absent from the entity set.
    #[error("event {event} references unknown entity {entity}")]
    UnknownParticipant {
        /// The offending event id.
        event: String,
        /// The unknown entity id.
        entity: String,
    },
    /// An edge references an entity id absent from the entity set.
    #[error("edge references unknown entity {0}")]
    UnknownEdgeSource(String),
    /// An edge references an event id absent from the event set.
    #[error("edge references unknown event {0}")]
    UnknownEdgeTarget(String),
    /// An edge's relation label is not `PARTICIPATED_IN`.
    #[error("edge has unsupported relation: {0}")]
    InvalidRelation(String),
    /// An edge's source entity does not appear in its target event's
    /// participant list.
    #[error("edge ({source}, {target}) has no matching participant entry")]
    EdgeParticipantMismatch {
        /// The edge's source entity id.
        source: String,
        /// The edge's target event id.
        target: String,
    },
    /// An event id did not match the required `E<integer>` wire form.
    #[error("invalid event id: {0}")]
    InvalidEventId(String),
}

// ============================================================================
// SECTION: Lookup Misses
// ============================================================================

/// A local, expected lookup miss. Never propagated as a failure by itself;
/// callers absorb it into the decision trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    /// No entity exists with the given id.
    #[error("no entity with id {0}")]
    EntityId(String),
    /// No entity claims the given alias.
    #[error("no entity with alias {0:?}")]
    Alias(String),
    /// No event exists with the given id.
    #[error("no event with id {0}")]
    EventId(String),
}
