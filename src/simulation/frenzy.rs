//! Social amplification - feeding frenzy detection
//!
//! Excitement spreads: a fish that sees nearby fish chasing or feeding
//! gets bolder itself. The scan runs over the read-only actor views in
//! the snapshot, never over live actor state.

use rand::Rng;

use crate::actor::Predator;
use crate::core::config::BehaviorConfig;
use crate::simulation::constants::FRENZY_STRIKE_BUDGET;
use crate::simulation::snapshot::ActorView;

/// Outcome of one frenzy evaluation
#[derive(Debug, Clone, Copy)]
pub struct FrenzyRoll {
    pub joined: bool,
    /// min(1.0, neighbors x intensity-per-neighbor)
    pub intensity: f32,
    /// Seconds of frenzy granted when joined
    pub duration: f32,
    pub excited_neighbors: usize,
}

/// Count excited actors within the amplified radius, excluding the
/// observer itself
pub fn excited_neighbors(actor: &Predator, others: &[ActorView], radius: f32) -> usize {
    others
        .iter()
        .filter(|v| v.id != actor.id)
        .filter(|v| v.state.is_excited())
        .filter(|v| actor.position.distance(&v.position) <= radius)
        .count()
}

/// Evaluate whether an actor joins a frenzy this decision tick
///
/// Callers gate on state (hooked, fleeing, and migrating fish never
/// frenzy) and on the frenzy not already being active.
pub fn evaluate(
    actor: &Predator,
    others: &[ActorView],
    detection_range: f32,
    config: &BehaviorConfig,
    rng: &mut impl Rng,
) -> FrenzyRoll {
    let radius = detection_range * config.frenzy_radius_factor;
    let count = excited_neighbors(actor, others, radius);

    let intensity = (count as f32 * config.frenzy_intensity_per_neighbor).min(1.0);
    let duration = config.frenzy_base_duration + count as f32 * config.frenzy_duration_per_neighbor;
    let joined = count >= 1 && rng.gen_bool(config.frenzy_join_chance);

    FrenzyRoll { joined, intensity, duration, excited_neighbors: count }
}

/// Apply a successful roll to the actor
pub fn apply(actor: &mut Predator, roll: &FrenzyRoll) {
    actor.frenzy.active = true;
    actor.frenzy.intensity = roll.intensity;
    actor.frenzy.remaining = roll.duration;
    tracing::debug!(
        actor = ?actor.id,
        neighbors = roll.excited_neighbors,
        intensity = roll.intensity,
        "entered frenzy"
    );
}

/// Strike attempts granted to a frenzied fish
pub fn frenzied_strike_budget(rng: &mut impl Rng) -> u8 {
    rng.gen_range(FRENZY_STRIKE_BUDGET.0..=FRENZY_STRIKE_BUDGET.1)
}
