// crates/itihasa-core/src/model.rs
// ============================================================================
// Module: Itihasa Domain Model
// Description: Entity, Event, and Edge records shared by every crate.
// Purpose: Define the immutable data model loaded from persisted artifacts.
// Dependencies: crate::ids, crate::event_type, serde
// ============================================================================

//! ## Overview
//! Entities and events are created once by the external graph-construction
//! pipeline (out of scope here) and are immutable for the life of the
//! process. These types carry no behavior beyond simple accessors; the
//! graph crate is responsible for indexing and validating them.

use serde::Deserialize;
use serde::Serialize;

use crate::event_type::EventType;
use crate::event_type::Tier;
use crate::ids::EntityId;
use crate::ids::EventId;

// ============================================================================
// SECTION: Entity Kind
// ============================================================================

/// The five-value classification of an entity.
///
/// # Invariants
/// - Ordering reflects seed-extraction tie-break priority:
///   `Person > Group > Place > Time > Literal` (see the planner crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    /// A named individual.
    Person,
    /// A collective of individuals (an army, a clan, a court).
    Group,
    /// A location.
    Place,
    /// A temporal reference (an era, a day, a season).
    Time,
    /// An abstract noun (a virtue, a weapon class, a concept).
    Literal,
}

impl EntityKind {
    /// Tie-break priority used when seed-extraction candidates overlap:
    /// lower value wins.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Person => 0,
            Self::Group => 1,
            Self::Place => 2,
            Self::Time => 3,
            Self::Literal => 4,
        }
    }
}

// ============================================================================
// SECTION: Entity
// ============================================================================

/// A narrative entity: a person, group, place, time reference, or literal.
///
/// # Invariants
/// - `aliases` contains `canonical_name`.
/// - `id` is globally unique within a loaded graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable, globally unique identifier.
    pub id: EntityId,
    /// Lowercased canonical name.
    pub canonical_name: String,
    /// Entity classification.
    pub kind: EntityKind,
    /// Popularity tiebreak: count of events this entity participates in.
    pub incident_event_count: u32,
    /// Lowercased alias strings, case-insensitive match keys.
    pub aliases: Vec<String>,
}

// ============================================================================
// SECTION: Event
// ============================================================================

/// A narrative occurrence linking one or more participant entities.
///
/// # Invariants
/// - Every id in `participants` exists in the entity set (validated at load).
/// - `participants` is deduplicated, preserving first-occurrence order.
/// - `tier` is always `event_type.tier()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Monotonic, densely assigned identifier.
    pub id: EventId,
    /// Event type, drawn from the closed 20-tag vocabulary.
    pub event_type: EventType,
    /// Narrative tier, derived from `event_type` at load time.
    pub tier: Tier,
    /// Source sentence providing evidence for this event.
    pub sentence: String,
    /// Ordered, deduplicated participant entity ids.
    pub participants: Vec<EntityId>,
}

// ============================================================================
// SECTION: Edge
// ============================================================================

/// A participation relation between an entity and an event.
///
/// # Invariants
/// - For edge `(source, target)`, `source` appears in
///   `events[target].participants` (validated at load).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The participating entity.
    pub source: EntityId,
    /// The event participated in.
    pub target: EventId,
    /// Evidence sentence for this participation.
    pub evidence: String,
}
