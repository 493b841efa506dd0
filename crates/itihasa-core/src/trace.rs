// crates/itihasa-core/src/trace.rs
// ============================================================================
// Module: Itihasa Decision Trace
// Description: Ordered record of every accept/reject decision taken by the
//              pipeline.
// Purpose: Make every stage explainable without side-effecting logging.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Trace`] is part of the contract, not a debug aid: every `Query
//! Result` and `Answer` carries one. Decisions are appended in the exact
//! order they were considered; nothing is ever removed or reordered.
//! Library code never writes traces to stdout or stderr — only the CLI
//! crate renders them, and only on request.

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Trace
// ============================================================================

/// An ordered, append-only log of human-readable decision strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(Vec<String>);

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a decision string.
    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    /// Appends every line of `other`, preserving order.
    pub fn extend(&mut self, other: Trace) {
        self.0.extend(other.0);
    }

    /// Returns the recorded lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Consumes the trace, returning the recorded lines in order.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }

    /// Returns `true` if no decisions were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of recorded decisions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
