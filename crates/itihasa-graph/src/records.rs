// crates/itihasa-graph/src/records.rs
// ============================================================================
// Module: Itihasa Wire Records
// Description: Serde shapes matching the persisted RON artifacts.
// Purpose: Decode `entities.ron`, `events.ron`, and `edges.ron` before
//          validation converts them into the core domain model.
// Dependencies: itihasa-core, serde
// ============================================================================

//! ## Overview
//! These types mirror the external interface contract in the
//! specification's persisted-input-files section exactly. They are decoded
//! as-is and then validated/converted by [`crate::store::GraphStore::load`];
//! nothing here enforces cross-record invariants.

use itihasa_core::EntityKind;
use itihasa_core::EventType;
use itihasa_core::Tier;
use serde::Deserialize;

/// One record of `entities.ron`.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    /// Opaque, globally unique entity id.
    pub id: String,
    /// Lowercased canonical name.
    pub canonical_name: String,
    /// Entity classification.
    pub kind: EntityKind,
    /// Count of events this entity participates in.
    pub event_count: u32,
    /// Case-insensitive alias strings.
    pub aliases: Vec<String>,
}

/// One record of `events.ron`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    /// Wire-form event id, matching `E<integer>`.
    pub id: String,
    /// Event type tag.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Declared narrative tier.
    pub tier: Tier,
    /// Source sentence.
    pub sentence: String,
    /// Ordered participant entity ids, as authored.
    pub participants: Vec<String>,
}

/// One record of `edges.ron`.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    /// Participating entity id.
    pub source: String,
    /// Relation label; always `PARTICIPATED_IN`.
    pub relation: String,
    /// Target event id.
    pub target: String,
    /// Evidence sentence for this participation.
    pub evidence: String,
}

/// The relation label every edge record must carry.
pub const PARTICIPATED_IN: &str = "PARTICIPATED_IN";
