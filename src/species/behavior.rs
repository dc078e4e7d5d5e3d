//! Species behavior framework
//!
//! All species share the decision state machine; these hooks override
//! the sub-behaviors that differ between ambushers, circlers, and
//! pursuit feeders. Dispatch is over the profile's `BehaviorKind`.

use rand::RngCore;

use crate::actor::Predator;
use crate::core::config::BehaviorConfig;
use crate::core::types::Vec2;
use crate::simulation::events::SideEffect;
use crate::simulation::snapshot::DepthMapper;
use crate::species::profile::BehaviorKind;

/// What a chasing fish decided to do this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChaseAction {
    /// Close on the target with the given velocity
    Pursue(Vec2),
    /// Still evaluating (circling); not ready to strike
    Evaluate(Vec2),
    /// Lost interest in the target
    Abandon,
}

/// Species-specific overrides consulted by the shared state machine
pub trait SpeciesBehavior {
    fn kind(&self) -> BehaviorKind;

    /// Cruising movement while idle
    ///
    /// `cruise_speed` already folds in the zone multiplier.
    fn idle_movement(&self, actor: &mut Predator, cruise_speed: f32) -> Vec2;

    /// Hook invoked once when a chase begins
    fn on_chase_start(&self, _actor: &mut Predator, _rng: &mut dyn RngCore) {}

    /// Movement while chasing; may emit side effects (lure bumps) and may
    /// refuse to commit to the strike yet
    fn chase_movement(
        &self,
        actor: &mut Predator,
        target: Vec2,
        chase_speed: f32,
        dt: f32,
        rng: &mut dyn RngCore,
        effects: &mut Vec<SideEffect>,
    ) -> ChaseAction;

    /// Speed multiplier applied during the strike lunge
    fn strike_speed_mult(&self) -> f32 {
        crate::simulation::constants::STRIKING_SPEED_MULT
    }

    /// Speed multiplier while running down live prey
    fn hunting_speed_mult(&self) -> f32;

    /// Corrective drift applied after normal movement derivation
    ///
    /// Used for ecological constraints independent of the AI target,
    /// e.g. thermocline compliance.
    fn depth_correction(
        &self,
        _actor: &mut Predator,
        _depth: &dyn DepthMapper,
        _config: &BehaviorConfig,
        _dt: f32,
    ) -> Vec2 {
        Vec2::ZERO
    }
}

/// Get the behavior handler for a profile kind
pub fn behavior_for(kind: BehaviorKind) -> Box<dyn SpeciesBehavior> {
    match kind {
        BehaviorKind::Ambush => Box::new(super::ambush::AmbushBehavior),
        BehaviorKind::Circler => Box::new(super::circler::CirclerBehavior),
        BehaviorKind::Pursuit => Box::new(super::pursuit::PursuitBehavior),
    }
}
