//! Species profiles and behavior overrides

pub mod ambush;
pub mod behavior;
pub mod circler;
pub mod profile;
pub mod pursuit;

pub use behavior::{behavior_for, ChaseAction, SpeciesBehavior};
pub use profile::{BehaviorKind, ProfileRegistry, SpeciesProfile};
