// crates/itihasa-executor/src/preamble.rs
// ============================================================================
// Module: Itihasa Executor Preamble
// Description: Seed resolution shared by every intent strategy.
// Purpose: Resolve a plan's seed entity ids against the Graph Store once,
//          tracing every hit and miss, before any strategy-specific logic
//          runs.
// Dependencies: itihasa-core, itihasa-graph
// ============================================================================

//! ## Overview
//! Every intent strategy begins the same way: resolve each seed via
//! `entity_by_id` (the planner already validated seeds against the
//! registry, so misses here would indicate a stale graph snapshot) and
//! trace `[RESOLVE] X -> id` or `[RESOLVE] X -> UNRESOLVED`. If no seed
//! resolves, the pipeline still runs to completion; it simply cannot
//! produce matches, and `found=false` follows naturally from empty
//! `matched_events`.

use itihasa_core::EntityId;
use itihasa_core::Trace;
use itihasa_graph::GraphStore;

/// Resolves every seed in `seeds` against the store, tracing each
/// resolution, and returns only those that actually exist in the graph.
pub(crate) fn resolve_seeds(seeds: &[EntityId], graph: &GraphStore, trace: &mut Trace) -> Vec<EntityId> {
    let mut resolved = Vec::with_capacity(seeds.len());
    for seed in seeds {
        match graph.entity_by_id(seed) {
            Ok(entity) => {
                trace.push(format!("[RESOLVE] {} -> {}", seed, entity.id));
                resolved.push(seed.clone());
            }
            Err(_) => {
                trace.push(format!("[RESOLVE] {seed} -> UNRESOLVED"));
            }
        }
    }
    resolved
}
