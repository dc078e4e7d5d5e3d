//! Tightlines - predator behavior and fight simulation core
//!
//! The behavioral heart of a fishing game: per-actor decision making
//! for predator fish reacting to a lure and to live prey, social
//! feeding frenzies, species-specific hunting styles, and the
//! tension/energy fight that follows a hookset. Rendering, input, and
//! scene management live in the host; this crate only consumes world
//! snapshots and produces states, movement intents, and side effects.

pub mod actor;
pub mod core;
pub mod fight;
pub mod simulation;
pub mod species;

pub use actor::{AiState, FrenzyState, Personality, Predator, Target};
pub use core::config::{BehaviorConfig, FightConfig};
pub use core::{Result, SimError};
pub use fight::{FightInput, FightOutcome, FightPhase, FightSession, FightStatus, TackleParams};
pub use simulation::{DecisionEngine, EngineOutput, SideEffect, WorldSnapshot};
pub use species::profile::{BehaviorKind, ProfileRegistry, SpeciesProfile};
