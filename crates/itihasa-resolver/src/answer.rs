// crates/itihasa-resolver/src/answer.rs
// ============================================================================
// Module: Itihasa Answer
// Description: The tagged-union Answer type produced by the resolver.
// Purpose: Model the four answer shapes as a true sum type, never a loose
//          map with a string discriminator callers must interpret.
// Dependencies: itihasa-core, serde
// ============================================================================

//! ## Overview
//! An [`Answer`] always carries a discriminator and a payload that agree
//! by construction: [`AnswerPayload`] is a Rust enum, so there is no way
//! to build an `ENTITY`-tagged answer with a `CHAIN` payload. The
//! downstream NLG layer (out of scope here) renders this value; this
//! crate never produces natural-language text.

use itihasa_core::Confidence;
use itihasa_core::EntityId;
use itihasa_core::EventId;
use itihasa_core::EventType;
use itihasa_core::Trace;
use serde::Deserialize;
use serde::Serialize;

/// One entity ranked by the resolver, with its observed frequency among
/// the inferred roles that produced this answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntity {
    /// The entity's id.
    pub id: EntityId,
    /// The entity's lowercased canonical name.
    pub name: String,
    /// Number of qualifying events that named this entity in the role
    /// being ranked (AGENT for FACT, beneficiary role for MULTI_HOP).
    pub frequency: u32,
}

/// One node of a CHAIN answer. Strictly alternates ENTITY, EVENT, ENTITY, …
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum ChainNode {
    /// An entity link in the chain.
    Entity {
        /// The entity's id.
        id: EntityId,
        /// The entity's lowercased canonical name.
        name: String,
    },
    /// An event link in the chain.
    Event {
        /// The event's id.
        id: EventId,
        /// The event's type.
        #[serde(rename = "type")]
        event_type: EventType,
    },
}

/// One event in an EVENT_LIST answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredEvent {
    /// The event's id.
    pub id: EventId,
    /// The event's type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// The event's evidentiary sentence.
    pub sentence: String,
}

/// The tagged-union answer payload. The variant IS the discriminator:
/// there is no separate `answer_type` string field to fall out of sync
/// with the payload's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "answer_type")]
pub enum AnswerPayload {
    /// One or more ranked entities (agents, or beneficiaries).
    #[serde(rename = "ENTITY")]
    Entity {
        /// Field name depends on which resolver produced this answer
        /// (`agents` for FACT, `beneficiaries` for MULTI_HOP); both are
        /// ranked-entity lists and share this representation.
        entities: Vec<RankedEntity>,
    },
    /// A strictly-alternating entity/event narrative chain.
    #[serde(rename = "CHAIN")]
    Chain {
        /// The chain, entity-event-entity-event in order.
        chain: Vec<ChainNode>,
    },
    /// An ordered list of events with no inferred roles.
    #[serde(rename = "EVENT_LIST")]
    EventList {
        /// The events, in the resolver's chosen order.
        events: Vec<AnsweredEvent>,
    },
    /// No answer could be grounded in the matched events.
    #[serde(rename = "NO_ANSWER")]
    NoAnswer,
}

/// The Answer Resolver's output: a typed payload, a structural confidence
/// label, the supporting event ids that actually contributed to the
/// payload (not the full matched-event set), and a decision trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The typed, self-describing payload.
    pub payload: AnswerPayload,
    /// Structural (non-probabilistic) confidence label.
    pub confidence: Confidence,
    /// Ids of events that actually contributed to `payload`.
    pub supporting_event_ids: Vec<EventId>,
    /// The ordered decision trace.
    pub trace: Trace,
}

impl Answer {
    /// Builds the `NO_ANSWER` variant with `confidence=high`: the
    /// specification's "we are sure we have no answer" rule (testable
    /// property 9).
    #[must_use]
    pub fn no_answer(trace: Trace) -> Self {
        Self {
            payload: AnswerPayload::NoAnswer,
            confidence: Confidence::High,
            supporting_event_ids: Vec::new(),
            trace,
        }
    }
}
