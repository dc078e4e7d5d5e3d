//! Ambush predators (pike, muskellunge)
//!
//! Holds near a fixed anchor point with barely any idle movement, then
//! strikes from an enlarged radius with an explosive burst.

use rand::RngCore;

use crate::actor::Predator;
use crate::core::geometry::toward;
use crate::core::types::Vec2;
use crate::simulation::constants::{
    AMBUSH_IDLE_SPEED_MULT, AMBUSH_PATROL_RADIUS, AMBUSH_STRIKE_BURST, STRIKING_SPEED_MULT,
};
use crate::simulation::events::SideEffect;
use crate::species::behavior::{ChaseAction, SpeciesBehavior};
use crate::species::profile::BehaviorKind;

pub struct AmbushBehavior;

impl SpeciesBehavior for AmbushBehavior {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Ambush
    }

    fn idle_movement(&self, actor: &mut Predator, cruise_speed: f32) -> Vec2 {
        let anchor = actor.ambush_anchor.unwrap_or(actor.position);
        let dist = actor.position.distance(&anchor);

        if dist > AMBUSH_PATROL_RADIUS {
            // Drifted off station; swim back at full cruise
            toward(actor.position, anchor, cruise_speed)
        } else {
            // On station: hold nearly still, nosing toward the anchor
            toward(actor.position, anchor, cruise_speed * AMBUSH_IDLE_SPEED_MULT)
        }
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

    fn strike_speed_mult(&self) -> f32 {
        STRIKING_SPEED_MULT * AMBUSH_STRIKE_BURST
    }

    fn hunting_speed_mult(&self) -> f32 {
        2.2
    }
}
