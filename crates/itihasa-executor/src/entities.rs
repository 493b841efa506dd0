// crates/itihasa-executor/src/entities.rs
// ============================================================================
// Module: Itihasa Matched-Entity Extraction
// Description: Post-step shared by every intent: derive matched entities
//              from matched events' participant lists.
// Purpose: Give the resolver a first-seen-ordered, deduplicated entity list
//          without a second graph traversal.
// Dependencies: itihasa-core, itihasa-graph
// ============================================================================

use std::collections::HashSet;

use itihasa_graph::GraphStore;

use crate::result::MatchedEntity;
use crate::result::MatchedEvent;

/// Traverses every matched event's participant list in order, resolves
/// each id, and emits deduplicated entity records in first-seen order.
pub(crate) fn extract_matched_entities(events: &[MatchedEvent], graph: &GraphStore) -> Vec<MatchedEntity> {
    let mut seen = HashSet::new();
    let mut entities = Vec::new();
    for event in events {
        for participant in &event.participants {
            if !seen.insert(participant.clone()) {
                continue;
            }
            if let Ok(entity) = graph.entity_by_id(participant) {
                entities.push(MatchedEntity {
                    id: entity.id.clone(),
                    canonical_name: entity.canonical_name.clone(),
                    kind: entity.kind,
                    incident_event_count: entity.incident_event_count,
                });
            }
        }
    }
    entities
}
