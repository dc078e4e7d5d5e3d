//! Investigative circlers (bass)
//!
//! A bass does not hit a lure on sight. It spends up to two seconds
//! orbiting it, sometimes bumping it without committing, then either
//! commits to the attack or loses interest.

use rand::{Rng, RngCore};

use crate::actor::Predator;
use crate::core::geometry::{angle_to, orbit_point, toward};
use crate::core::types::Vec2;
use crate::simulation::constants::{
    CIRCLE_ANGULAR_SPEED, CIRCLE_BUMP_CHANCE, CIRCLE_COMMIT_CHANCE, CIRCLE_DURATION, CIRCLE_RADIUS,
};
use crate::simulation::events::SideEffect;
use crate::species::behavior::{ChaseAction, SpeciesBehavior};
use crate::species::profile::BehaviorKind;

pub struct CirclerBehavior;

impl SpeciesBehavior for CirclerBehavior {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Circler
    }

    fn idle_movement(&self, actor: &mut Predator, cruise_speed: f32) -> Vec2 {
        actor.wander_dir * cruise_speed
    }

    fn on_chase_start(&self, actor: &mut Predator, _rng: &mut dyn RngCore) {
        actor.circle_timer = CIRCLE_DURATION;
        // Start the orbit from wherever the fish already is
        actor.circle_angle = angle_to(Vec2::ZERO, actor.position);
    }

    fn chase_movement(
        &self,
        actor: &mut Predator,
        target: Vec2,
        chase_speed: f32,
        dt: f32,
        rng: &mut dyn RngCore,
        effects: &mut Vec<SideEffect>,
    ) -> ChaseAction {
        if actor.circle_timer <= 0.0 {
            return ChaseAction::Pursue(toward(actor.position, target, chase_speed));
        }

        actor.circle_timer -= dt;
        actor.circle_angle += CIRCLE_ANGULAR_SPEED * dt;

        // No time passed means no bump roll, so a repeated snapshot
        // cannot double-nudge the lure
        if dt > 0.0 && rng.gen_bool(CIRCLE_BUMP_CHANCE) {
            effects.push(SideEffect::BumpLure);
        }

        if actor.circle_timer <= 0.0 {
            // Evaluation over: commit or walk away
            return if rng.gen_bool(CIRCLE_COMMIT_CHANCE) {
                ChaseAction::Pursue(toward(actor.position, target, chase_speed))
            } else {
                ChaseAction::Abandon
            };
        }

        let orbit = orbit_point(target, CIRCLE_RADIUS, actor.circle_angle);
        ChaseAction::Evaluate(toward(actor.position, orbit, chase_speed * 0.7))
    }

    fn hunting_speed_mult(&self) -> f32 {
        1.2
    }
}
