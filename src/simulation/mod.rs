//! The per-actor decision engine and the world model it reads

pub mod constants;
pub mod engine;
pub mod events;
pub mod frenzy;
pub mod perception;
pub mod snapshot;

pub use engine::DecisionEngine;
pub use events::{EngineOutput, SideEffect};
pub use snapshot::{
    ActorView, DepthMapper, FieldBounds, LinearDepthScale, LureMotion, LureState, PreyMember,
    PreySchool, WorldSnapshot,
};
