//! The catch minigame: an independent fight state machine per hooked fish

pub mod session;

pub use session::{
    line_breaks, FightInput, FightOutcome, FightPhase, FightSession, FightStatus, TackleParams,
};
