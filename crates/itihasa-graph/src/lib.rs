// crates/itihasa-graph/src/lib.rs
// ============================================================================
// Module: Itihasa Graph Library
// Description: Graph Store loading, indexing, and read-only lookup surface.
// Purpose: The sole boundary between persisted corpus artifacts and the
//          rest of the query pipeline.
// Dependencies: itihasa-core, ron
// ============================================================================

//! ## Overview
//! `itihasa-graph` loads `entities.ron`, `events.ron`, and `edges.ron`,
//! validates every structural invariant described in the specification's
//! data-model section, and exposes constant-time lookups over the result.
//! The store is read-only after [`GraphStore::load`] returns.

mod error;
mod records;
mod registry;
mod store;

pub use error::LoadError;
pub use error::NotFound;
pub use records::EdgeRecord;
pub use records::EntityRecord;
pub use records::EventRecord;
pub use registry::EntityRegistrySnapshot;
pub use registry::RegistryEntity;
pub use store::GraphPaths;
pub use store::GraphStore;
