// crates/itihasa-planner/src/lib.rs
// ============================================================================
// Module: Itihasa Query Planner Library
// Description: Pure rule-based translation of question text into a Query
//              Plan.
// Purpose: The sole boundary between free-form text and the typed plan the
//          executor consumes.
// Dependencies: itihasa-core, itihasa-graph, serde
// ============================================================================

//! ## Overview
//! `itihasa-planner` is a pure function crate: [`plan`] never fails and
//! never touches the filesystem or network. It tokenizes the question
//! text once and shares that token stream across intent classification,
//! seed extraction, event-type narrowing, and constraint inference so
//! that "same input always yields the same plan" holds by construction.

mod constraints;
mod event_types;
mod intent;
mod plan;
mod seeds;
mod tokenize;

pub use constraints::Constraints;
pub use intent::Intent;
pub use intent::TemporalOrder;
pub use plan::QueryPlan;
pub use plan::plan;
