//! Side effects emitted by the decision engine for the host to realize
//!
//! The engine never touches host-owned state (lure, prey schools, actor
//! lifetimes); everything it wants done in the world comes back as a
//! discrete event in the update output.

use serde::{Deserialize, Serialize};

use crate::actor::AiState;
use crate::core::types::{FieldEdge, SchoolId, Vec2};

/// Discrete event the host must realize after an engine update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SideEffect {
    /// The fish committed to a strike; the host runs hookset detection
    /// and calls back `confirm_hookset` if the hook lands
    StrikeAttempted,
    /// The fish ate the given prey member; the host marks it consumed
    PreyConsumed { school: SchoolId, member: usize },
    /// Non-committal nudge on the lure (circling species)
    BumpLure,
    /// The fish joined a feeding frenzy
    EnteredFrenzy,
    /// The fish gave up on the area and is heading off-field
    MigrationStarted(FieldEdge),
    /// A migrating fish reached the field margin; safe to despawn
    LeavingArea,
}

/// Per-tick result of a decision engine update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOutput {
    pub state: AiState,
    /// Velocity the host applies to the actor this tick (units/s)
    pub movement: Vec2,
    pub side_effects: Vec<SideEffect>,
}
