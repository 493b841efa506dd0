// crates/itihasa-graph/src/store.rs
// ============================================================================
// Module: Itihasa Graph Store
// Description: Loads and indexes the three persisted artifacts; exposes
//              constant-time lookups over an immutable, in-memory graph.
// Purpose: The sole point of contact between persisted corpus data and the
//          query pipeline.
// Dependencies: itihasa-core, ron, std::collections
// ============================================================================

//! ## Overview
//! [`GraphStore::load`] validates every structural invariant up front and
//! fails closed: a store either loads completely and correctly, or it does
//! not exist. After load, nothing mutates; every lookup is O(1) except
//! [`GraphStore::events_incident_to`], whose result is itself precomputed
//! at load time and merely returned by reference.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use itihasa_core::Edge;
use itihasa_core::Entity;
use itihasa_core::EntityId;
use itihasa_core::Event;
use itihasa_core::EventId;

use crate::error::LoadError;
use crate::error::NotFound;
use crate::records::EdgeRecord;
use crate::records::EntityRecord;
use crate::records::EventRecord;
use crate::records::PARTICIPATED_IN;
use crate::registry::EntityRegistrySnapshot;
use crate::registry::RegistryEntity;

// ============================================================================
// SECTION: Artifact Paths
// ============================================================================

/// Filesystem locations of the three persisted artifacts.
#[derive(Debug, Clone)]
pub struct GraphPaths {
    /// Path to `entities.ron`.
    pub entities: PathBuf,
    /// Path to `events.ron`.
    pub events: PathBuf,
    /// Path to `edges.ron`.
    pub edges: PathBuf,
}

impl GraphPaths {
    /// Builds the three conventional artifact paths under a directory.
    #[must_use]
    pub fn under_directory(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            entities: dir.join("entities.ron"),
            events: dir.join("events.ron"),
            edges: dir.join("edges.ron"),
        }
    }
}

// ============================================================================
// SECTION: Graph Store
// ============================================================================

/// The loaded, validated, read-only narrative knowledge graph.
///
/// # Invariants
/// - Immutable after [`GraphStore::load`] returns.
/// - Every index is built once and never rebuilt.
pub struct GraphStore {
    entities: HashMap<EntityId, Entity>,
    alias_index: HashMap<String, EntityId>,
    events: HashMap<EventId, Event>,
    incident: HashMap<EntityId, Vec<EventId>>,
    registry: EntityRegistrySnapshot,
}

impl GraphStore {
    /// Loads and validates the three artifacts, building every index.
    ///
    /// # Errors
    /// Returns [`LoadError`] when any file is missing, malformed,
    /// references an unknown id, or violates an alias, id, or
    /// participant-consistency invariant.
    pub fn load(paths: &GraphPaths) -> Result<Self, LoadError> {
        let entity_records = read_ron::<Vec<EntityRecord>>(&paths.entities)?;
        let event_records = read_ron::<Vec<EventRecord>>(&paths.events)?;
        let edge_records = read_ron::<Vec<EdgeRecord>>(&paths.edges)?;
        Self::from_records(entity_records, event_records, edge_records)
    }

    /// Validates and indexes already-decoded records. Split out from
    /// [`GraphStore::load`] so tests — in this crate and downstream
    /// pipeline crates — can construct fixture stores without touching the
    /// filesystem.
    pub fn from_records(
        entity_records: Vec<EntityRecord>,
        event_records: Vec<EventRecord>,
        edge_records: Vec<EdgeRecord>,
    ) -> Result<Self, LoadError> {
        let (entities, alias_index, registry_by_alias) = build_entities(entity_records)?;
        let events = build_events(event_records, &entities)?;
        validate_edges(edge_records, &entities, &events)?;
        let incident = build_incident_index(&events);

        Ok(Self {
            entities,
            alias_index,
            events,
            incident,
            registry: EntityRegistrySnapshot::new(registry_by_alias),
        })
    }

    /// Returns the planner-visible alias registry derived at load time.
    #[must_use]
    pub fn registry(&self) -> &EntityRegistrySnapshot {
        &self.registry
    }

    /// Looks up an entity by its stable id.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no entity has this id.
    pub fn entity_by_id(&self, id: &EntityId) -> Result<&Entity, NotFound> {
        self.entities
            .get(id)
            .ok_or_else(|| NotFound::EntityId(id.as_str().to_string()))
    }

    /// Looks up an entity id by a case-insensitive alias.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no entity claims this alias.
    pub fn entity_by_alias(&self, alias: &str) -> Result<EntityId, NotFound> {
        let normalized = alias.to_lowercase();
        self.alias_index
            .get(&normalized)
            .cloned()
            .ok_or(NotFound::Alias(normalized))
    }

    /// Looks up an event by its id.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no event has this id.
    pub fn event_by_id(&self, id: EventId) -> Result<&Event, NotFound> {
        self.events.get(&id).ok_or_else(|| NotFound::EventId(id.to_string()))
    }

    /// Returns the ids of events incident to an entity, sorted ascending
    /// by the event id's integer suffix.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no entity has this id.
    pub fn events_incident_to(&self, entity_id: &EntityId) -> Result<&[EventId], NotFound> {
        if !self.entities.contains_key(entity_id) {
            return Err(NotFound::EntityId(entity_id.as_str().to_string()));
        }
        Ok(self.incident.get(entity_id).map_or(&[][..], Vec::as_slice))
    }

    /// Returns the participant ids of an event, in their stored order.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no event has this id.
    pub fn participants_of(&self, event_id: EventId) -> Result<&[EntityId], NotFound> {
        self.event_by_id(event_id).map(|event| event.participants.as_slice())
    }

    /// Total number of loaded entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Total number of loaded events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Returns every loaded event id, sorted ascending by integer suffix.
    ///
    /// Used by the TEMPORAL strategy, which must scan the full event set
    /// rather than a single entity's incident events.
    #[must_use]
    pub fn all_event_ids(&self) -> Vec<EventId> {
        let mut ids: Vec<EventId> = self.events.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

// ============================================================================
// SECTION: Load Helpers
// ============================================================================

/// Reads and decodes a RON-encoded artifact file.
fn read_ron<T>(path: &Path) -> Result<T, LoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ron::from_str(&text).map_err(|source| LoadError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

/// Id index, alias index, and registry projection built from entity records.
type EntityBuildResult =
    (HashMap<EntityId, Entity>, HashMap<String, EntityId>, HashMap<String, RegistryEntity>);

/// Validates entity records and builds the id/alias indices in one pass.
fn build_entities(records: Vec<EntityRecord>) -> Result<EntityBuildResult, LoadError> {
    let mut entities = HashMap::with_capacity(records.len());
    let mut alias_index: HashMap<String, EntityId> = HashMap::new();
    let mut registry_by_alias = HashMap::new();

    for record in records {
        let id = EntityId::new(record.id.clone());
        if entities.contains_key(&id) {
            return Err(LoadError::DuplicateEntityId(record.id));
        }

        let normalized_canonical = record.canonical_name.to_lowercase();
        let normalized_aliases: Vec<String> =
            record.aliases.iter().map(|alias| alias.to_lowercase()).collect();
        if !normalized_aliases.contains(&normalized_canonical) {
            return Err(LoadError::MissingCanonicalAlias { entity: record.id });
        }

        let registry_entity = RegistryEntity {
            id: id.clone(),
            canonical_name: normalized_canonical.clone(),
            kind: record.kind,
        };

        for alias in &normalized_aliases {
            if let Some(existing) = alias_index.get(alias) {
                return Err(LoadError::AliasCollision {
                    alias: alias.clone(),
                    first: existing.as_str().to_string(),
                    second: id.as_str().to_string(),
                });
            }
            alias_index.insert(alias.clone(), id.clone());
            registry_by_alias.insert(alias.clone(), registry_entity.clone());
        }

        entities.insert(
            id.clone(),
            Entity {
                id,
                canonical_name: normalized_canonical,
                kind: record.kind,
                incident_event_count: record.event_count,
                aliases: normalized_aliases,
            },
        );
    }

    Ok((entities, alias_index, registry_by_alias))
}

/// Validates event records (ids, tiers, participants) and builds the event index.
fn build_events(
    records: Vec<EventRecord>,
    entities: &HashMap<EntityId, Entity>,
) -> Result<HashMap<EventId, Event>, LoadError> {
    let mut events = HashMap::with_capacity(records.len());

    for record in records {
        let id = EventId::parse(&record.id).map_err(|_| LoadError::InvalidEventId(record.id.clone()))?;
        if events.contains_key(&id) {
            return Err(LoadError::DuplicateEventId(record.id));
        }

        let derived_tier = record.event_type.tier();
        if derived_tier != record.tier {
            return Err(LoadError::TierMismatch {
                event: record.id,
                event_type: format!("{:?}", record.event_type),
                declared: format!("{:?}", record.tier),
                derived: format!("{derived_tier:?}"),
            });
        }

        if record.participants.is_empty() {
            return Err(LoadError::EmptyParticipants(record.id));
        }

        let mut seen = HashSet::with_capacity(record.participants.len());
        let mut participants = Vec::with_capacity(record.participants.len());
        for raw in record.participants {
            let participant_id = EntityId::new(raw);
            if !entities.contains_key(&participant_id) {
                return Err(LoadError::UnknownParticipant {
                    event: record.id,
                    entity: participant_id.as_str().to_string(),
                });
            }
            if seen.insert(participant_id.clone()) {
                participants.push(participant_id);
            }
        }

        events.insert(
            id,
            Event {
                id,
                event_type: record.event_type,
                tier: record.tier,
                sentence: record.sentence,
                participants,
            },
        );
    }

    Ok(events)
}

/// Validates that every edge references known endpoints and a matching
/// participant entry; edges are not retained, only checked, since events'
/// own participant lists are the canonical source for the incident index.
fn validate_edges(
    records: Vec<EdgeRecord>,
    entities: &HashMap<EntityId, Entity>,
    events: &HashMap<EventId, Event>,
) -> Result<(), LoadError> {
    for record in records {
        if record.relation != PARTICIPATED_IN {
            return Err(LoadError::InvalidRelation(record.relation));
        }
        let source = EntityId::new(record.source.clone());
        if !entities.contains_key(&source) {
            return Err(LoadError::UnknownEdgeSource(record.source));
        }
        let target = EventId::parse(&record.target)
            .map_err(|_| LoadError::UnknownEdgeTarget(record.target.clone()))?;
        let Some(event) = events.get(&target) else {
            return Err(LoadError::UnknownEdgeTarget(record.target));
        };
        if !event.participants.contains(&source) {
            return Err(LoadError::EdgeParticipantMismatch {
                source: record.source,
                target: record.target,
            });
        }
    }
    Ok(())
}

/// Scans every event once to build the entity -> sorted incident-event index.
fn build_incident_index(events: &HashMap<EventId, Event>) -> HashMap<EntityId, Vec<EventId>> {
    let mut incident: HashMap<EntityId, Vec<EventId>> = HashMap::new();
    for event in events.values() {
        for participant in &event.participants {
            incident.entry(participant.clone()).or_default().push(event.id);
        }
    }
    for ids in incident.values_mut() {
        ids.sort_unstable();
    }
    incident
}
