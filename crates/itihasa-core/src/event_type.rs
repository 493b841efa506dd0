// crates/itihasa-core/src/event_type.rs
// ============================================================================
// Module: Itihasa Event Vocabulary
// Description: The closed set of 20 event types and their tier classification.
// Purpose: Give every crate a single, authoritative event-type vocabulary.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Event types are a closed set: 8 MACRO (high-level narrative occurrences)
//! and 12 MESO (tactical/supporting occurrences). Tier is derived from type,
//! never stored independently of it, so the two can never disagree.

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Tier
// ============================================================================

/// Narrative weight of an event: macro (high-level) or meso (tactical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    /// High-level narrative occurrence.
    Macro,
    /// Tactical or supporting occurrence.
    Meso,
}

// ============================================================================
// SECTION: Event Type
// ============================================================================

/// The closed vocabulary of narrative event types.
///
/// # Invariants
/// - Exactly 20 variants: 8 MACRO, 12 MESO.
/// - [`EventType::tier`] is a pure function of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// MACRO: one entity ends another's life.
    Kill,
    /// MACRO: an entity's death, cause unspecified or already captured by a KILL.
    Death,
    /// MACRO: an armed confrontation between entities.
    Battle,
    /// MACRO: an entity orders another to act.
    Command,
    /// MACRO: a favor granted, typically divine or by a superior.
    Boon,
    /// MACRO: a solemn pledge made by an entity.
    Vow,
    /// MACRO: a condemnation placed on an entity.
    Curse,
    /// MACRO: an entity is crowned or installed as ruler.
    Coronation,
    /// MESO: an entity is engaged in an ongoing battle.
    EngagedInBattle,
    /// MESO: an entity is defeated by another.
    Defeated,
    /// MESO: an entity shields another from harm.
    Protected,
    /// MESO: an entity chases another.
    Pursued,
    /// MESO: an entity is saved from danger.
    Rescued,
    /// MESO: an entity is named to a role or position.
    AppointedAs,
    /// MESO: an entity is forsaken by another.
    Abandoned,
    /// MESO: an entity assaults another.
    Attacked,
    /// MESO: an entity wards off an attack on another.
    Defended,
    /// MESO: an entity withdraws from conflict.
    Retreated,
    /// MESO: an entity is encircled.
    Surrounded,
    /// MESO: an entity backs another's cause.
    Supported,
}

impl EventType {
    /// The full closed vocabulary, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::Kill,
        Self::Death,
        Self::Battle,
        Self::Command,
        Self::Boon,
        Self::Vow,
        Self::Curse,
        Self::Coronation,
        Self::EngagedInBattle,
        Self::Defeated,
        Self::Protected,
        Self::Pursued,
        Self::Rescued,
        Self::AppointedAs,
        Self::Abandoned,
        Self::Attacked,
        Self::Defended,
        Self::Retreated,
        Self::Surrounded,
        Self::Supported,
    ];

    /// Returns this event type's narrative tier. Derived, never stored.
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Kill
            | Self::Death
            | Self::Battle
            | Self::Command
            | Self::Boon
            | Self::Vow
            | Self::Curse
            | Self::Coronation => Tier::Macro,
            Self::EngagedInBattle
            | Self::Defeated
            | Self::Protected
            | Self::Pursued
            | Self::Rescued
            | Self::AppointedAs
            | Self::Abandoned
            | Self::Attacked
            | Self::Defended
            | Self::Retreated
            | Self::Surrounded
            | Self::Supported => Tier::Meso,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::EventType;
    use super::Tier;

    #[test]
    fn macro_count_is_eight() {
        let macro_count = EventType::ALL.iter().filter(|t| t.tier() == Tier::Macro).count();
        assert_eq!(macro_count, 8);
    }

    #[test]
    fn meso_count_is_twelve() {
        let meso_count = EventType::ALL.iter().filter(|t| t.tier() == Tier::Meso).count();
        assert_eq!(meso_count, 12);
    }

    #[test]
    fn tier_is_deterministic() {
        for event_type in EventType::ALL {
            assert_eq!(event_type.tier(), event_type.tier());
        }
    }
}
