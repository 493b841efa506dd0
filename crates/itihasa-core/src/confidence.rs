// crates/itihasa-core/src/confidence.rs
// ============================================================================
// Module: Itihasa Confidence Label
// Description: Structural (non-probabilistic) confidence classification.
// Purpose: Communicate answer reliability without inventing a probability.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Confidence is derived structurally from the cardinality and clarity of
//! matches, never from a learned score. See each resolver sub-module for
//! the exact rule used per intent.

use serde::Deserialize;
use serde::Serialize;

/// Structural confidence label attached to every [`crate::Trace`]d answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// A single, unambiguous result, or a confident absence of one.
    High,
    /// A small number of plausible candidates.
    Medium,
    /// Many candidates, or a structurally weak derivation (e.g. temporal
    /// ordering over an id proxy).
    Low,
}
