//! Pursuit feeders (trout, walleye)
//!
//! Default chase behavior plus depth-band compliance: a fish that hangs
//! above the thermocline too long drifts back down regardless of what
//! its AI target is doing.

use rand::RngCore;

use crate::actor::Predator;
use crate::core::config::BehaviorConfig;
use crate::core::geometry::toward;
use crate::core::types::Vec2;
use crate::simulation::events::SideEffect;
use crate::simulation::snapshot::DepthMapper;
use crate::species::behavior::{ChaseAction, SpeciesBehavior};
use crate::species::profile::BehaviorKind;

pub struct PursuitBehavior;

impl SpeciesBehavior for PursuitBehavior {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Pursuit
    }

    fn idle_movement(&self, actor: &mut Predator, cruise_speed: f32) -> Vec2 {
        actor.wander_dir * cruise_speed
    }

    fn chase_movement(
        &self,
        actor: &mut Predator,
        target: Vec2,
        chase_speed: f32,
        _dt: f32,
        _rng: &mut dyn RngCore,
        _effects: &mut Vec<SideEffect>,
    ) -> ChaseAction {
        ChaseAction::Pursue(toward(actor.position, target, chase_speed))
    }

    fn hunting_speed_mult(&self) -> f32 {
        1.8
    }

    fn depth_correction(
        &self,
        actor: &mut Predator,
        depth: &dyn DepthMapper,
        config: &BehaviorConfig,
        dt: f32,
    ) -> Vec2 {
        let current = depth.depth_at(actor.position.y);
        if current < config.thermocline_depth {
            actor.above_band_for += dt;
        } else {
            actor.above_band_for = 0.0;
        }

        if actor.above_band_for > config.thermocline_grace {
            // Downward drift until back under the boundary
            Vec2::new(0.0, config.thermocline_drift_speed)
        } else {
            Vec2::ZERO
        }
    }
}
