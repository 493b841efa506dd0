// crates/itihasa-core/src/ids.rs
// ============================================================================
// Module: Itihasa Identifiers
// Description: Canonical opaque identifiers for entities and events.
// Purpose: Provide strongly typed, serializable identifiers with stable wire
//          forms and deterministic ordering.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Entity identifiers are opaque, author-assigned strings (e.g.
//! `person_karna`). Event identifiers are the letter `E` followed by a
//! dense, monotonically assigned integer (e.g. `E1200`); the integer
//! suffix is the only temporal proxy available to the rest of the system
//! (see the executor and resolver crates), so it is parsed once at
//! construction and kept alongside the canonical string form.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Entity Identifier
// ============================================================================

/// Opaque, globally unique identifier for an entity.
///
/// # Invariants
/// - Non-empty.
/// - Stable across loads of the same graph artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new entity identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Event Identifier
// ============================================================================

/// Opaque, densely numbered identifier for an event, of the wire form
/// `E<integer>`.
///
/// # Invariants
/// - The integer suffix is the sole temporal proxy: ordering by suffix is
///   ordering by narrative occurrence.
/// - Unique within a single loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventId(u64);

impl EventId {
    /// Creates an event identifier from its raw integer suffix.
    #[must_use]
    pub const fn from_suffix(suffix: u64) -> Self {
        Self(suffix)
    }

    /// Returns the integer suffix, the sole ordering/temporal proxy.
    #[must_use]
    pub const fn suffix(self) -> u64 {
        self.0
    }

    /// Parses the wire form `E<integer>` into an [`EventId`].
    ///
    /// # Errors
    /// Returns [`EventIdParseError`] when the text does not match the
    /// expected `E<integer>` form.
    pub fn parse(text: &str) -> Result<Self, EventIdParseError> {
        let Some(digits) = text.strip_prefix('E') else {
            return Err(EventIdParseError {
                text: text.to_string(),
            });
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EventIdParseError {
                text: text.to_string(),
            });
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| EventIdParseError {
                text: text.to_string(),
            })
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl TryFrom<String> for EventId {
    type Error = EventIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EventId> for String {
    fn from(value: EventId) -> Self {
        value.to_string()
    }
}

/// Error returned when an event identifier does not match `E<integer>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventIdParseError {
    /// The rejected text.
    pub text: String,
}

impl fmt::Display for EventIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid event id (expected E<integer>): {}", self.text)
    }
}

impl std::error::Error for EventIdParseError {}

// ============================================================================
// SECTION: Tests
// ============================================================================
