// crates/itihasa-graph/src/registry.rs
// ============================================================================
// Module: Itihasa Entity Registry Snapshot
// Description: Read-only alias-to-entity mapping consumed only by the planner.
// Purpose: Decouple the planner from the full graph store's lookup surface.
// Dependencies: itihasa-core, std::collections
// ============================================================================

//! ## Overview
//! The registry snapshot is derived once, at load time, from the graph
//! store's alias index. It is the only view of the graph the planner is
//! allowed to see: a pure alias -> entity-record mapping, with no event
//! data and no ability to traverse.

use std::collections::HashMap;

use itihasa_core::EntityId;
use itihasa_core::EntityKind;

/// The planner-visible projection of an entity: id, canonical name, kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntity {
    /// The entity's stable id.
    pub id: EntityId,
    /// The entity's lowercased canonical name.
    pub canonical_name: String,
    /// The entity's classification.
    pub kind: EntityKind,
}

/// Read-only alias -> entity mapping, derived once from the graph store.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistrySnapshot {
    by_alias: HashMap<String, RegistryEntity>,
}

impl EntityRegistrySnapshot {
    /// Constructs a snapshot from an already-validated alias index.
    #[must_use]
    pub(crate) fn new(by_alias: HashMap<String, RegistryEntity>) -> Self {
        Self { by_alias }
    }

    /// Looks up an entity by a lowercased alias string.
    #[must_use]
    pub fn lookup(&self, alias: &str) -> Option<&RegistryEntity> {
        self.by_alias.get(alias)
    }
}
