//! Decision engine - the per-actor behavioral state machine
//!
//! This is the heart of the simulation. Each tick the host hands every
//! predator's engine a read-only world snapshot; the engine updates the
//! actor's state, derives a movement vector, and returns the side
//! effects the host must realize. Full re-evaluation is throttled by a
//! decision cooldown; movement interpolation still runs every tick.
//!
//! Nothing in here panics on bad world data. A target that vanished
//! from the snapshot decays the actor back to idle; the only hard error
//! in the whole subsystem is a missing species profile, raised at actor
//! construction rather than mid-simulation.

use rand::Rng;

use crate::actor::{AiState, Predator, Target};
use crate::core::config::BehaviorConfig;
use crate::core::geometry::{direction_to, distance, toward};
use crate::core::types::{DepthZone, Vec2};
use crate::simulation::constants::*;
use crate::simulation::events::{EngineOutput, SideEffect};
use crate::simulation::frenzy;
use crate::simulation::perception;
use crate::simulation::snapshot::{DepthMapper, LureState, WorldSnapshot};
use crate::species::behavior::{behavior_for, ChaseAction, SpeciesBehavior};
use crate::species::profile::{ProfileRegistry, SpeciesProfile};

/// Per-actor decision engine
///
/// Stateless across actors: all per-fish state lives on the `Predator`,
/// so one engine instance can serve the whole population.
pub struct DecisionEngine {
    config: BehaviorConfig,
    registry: ProfileRegistry,
    depth: Box<dyn DepthMapper>,
}

impl DecisionEngine {
    pub fn new(config: BehaviorConfig, registry: ProfileRegistry, depth: Box<dyn DepthMapper>) -> Self {
        Self { config, registry, depth }
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Advance one actor by one tick
    pub fn update(
        &self,
        actor: &mut Predator,
        snapshot: &WorldSnapshot,
        rng: &mut impl Rng,
    ) -> EngineOutput {
        let now = snapshot.timestamp;
        let dt = match actor.last_update_at {
            Some(prev) => (now - prev).max(0.0) as f32,
            None => 0.0,
        };
        actor.last_update_at = Some(now);

        let mut effects = Vec::new();

        let profile = match self.registry.get(actor.species) {
            Ok(p) => p,
            Err(e) => {
                // Host swapped in a registry that no longer knows this
                // species; freeze the fish rather than crash the loop.
                tracing::warn!(actor = ?actor.id, error = %e, "profile lookup failed mid-simulation");
                return EngineOutput {
                    state: actor.state(),
                    movement: Vec2::ZERO,
                    side_effects: effects,
                };
            }
        };
        let behavior = behavior_for(profile.behavior);

        self.biology_tick(actor, dt);
        self.advance_timers(actor, dt);

        // While hooked the fight simulation owns the fish entirely
        if actor.state() == AiState::Hooked {
            return EngineOutput { state: AiState::Hooked, movement: Vec2::ZERO, side_effects: effects };
        }

        let actor_depth = self.depth.depth_at(actor.position.y);
        let zone = self.config.zone_for(actor_depth);

        self.check_migration(actor, snapshot, dt, &mut effects);
        self.check_frenzy(actor, snapshot, profile, dt, rng, &mut effects);
        self.validate_target(actor, snapshot);

        if now >= actor.next_decision_at {
            actor.next_decision_at = now + self.config.decision_cooldown;
            self.evaluate_state(
                actor,
                profile,
                behavior.as_ref(),
                snapshot,
                actor_depth,
                zone,
                rng,
                &mut effects,
            );
        }

        let mut movement =
            self.movement_for(actor, behavior.as_ref(), snapshot, zone, dt, rng, &mut effects);
        movement = movement + behavior.depth_correction(actor, self.depth.as_ref(), &self.config, dt);

        EngineOutput { state: actor.state(), movement, side_effects: effects }
    }

    /// External hookset signal; only honored during the strike window
    pub fn confirm_hookset(&self, actor: &mut Predator) -> bool {
        if actor.state() == AiState::Striking && actor.strike_window > 0.0 {
            actor.set_state(AiState::Hooked);
            actor.clear_target();
            actor.strike_window = 0.0;
            actor.frenzy = Default::default();
            true
        } else {
            false
        }
    }

    /// Return a fish to a sane default after a fight ends or is abandoned
    pub fn release_from_fight(&self, actor: &mut Predator) {
        if actor.state() == AiState::Hooked {
            actor.set_state(AiState::Idle);
        }
        actor.clear_target();
        actor.strike_budget = 0;
        actor.strike_window = 0.0;
    }

    fn biology_tick(&self, actor: &mut Predator, dt: f32) {
        actor.set_hunger(actor.hunger() + self.config.hunger_rate * dt);
        if dt > 0.0 {
            actor.age_ticks += 1;
        }
    }

    fn advance_timers(&self, actor: &mut Predator, dt: f32) {
        actor.frenzy.decay(dt);
        actor.strike_window = (actor.strike_window - dt).max(0.0);
        actor.flee_timer = (actor.flee_timer - dt).max(0.0);
        actor.feed_timer = (actor.feed_timer - dt).max(0.0);
    }

    /// Food-timeout migration override; resets the instant prey returns
    fn check_migration(
        &self,
        actor: &mut Predator,
        snapshot: &WorldSnapshot,
        dt: f32,
        effects: &mut Vec<SideEffect>,
    ) {
        if snapshot.any_school_alive() {
            actor.prey_absence = 0.0;
            if actor.migrating {
                actor.migrating = false;
                actor.migration_edge = None;
                actor.leaving_announced = false;
                if actor.state() == AiState::Migrating {
                    actor.set_state(AiState::Idle);
                }
            }
            return;
        }

        actor.prey_absence += dt;

        if !actor.migrating
            && actor.prey_absence > self.config.food_timeout
            && actor.state() != AiState::Striking
        {
            let edge = snapshot.field.nearer_edge(actor.position);
            actor.migrating = true;
            actor.migration_edge = Some(edge);
            actor.clear_target();
            actor.set_state(AiState::Migrating);
            effects.push(SideEffect::MigrationStarted(edge));
            tracing::debug!(actor = ?actor.id, ?edge, "food timeout, migrating off-field");
        }
    }

    fn check_frenzy(
        &self,
        actor: &mut Predator,
        snapshot: &WorldSnapshot,
        profile: &SpeciesProfile,
        dt: f32,
        rng: &mut impl Rng,
        effects: &mut Vec<SideEffect>,
    ) {
        // No elapsed time means no join roll, so a repeated snapshot
        // cannot re-roll its way into a frenzy
        if dt <= 0.0
            || actor.frenzy.active
            || matches!(actor.state(), AiState::Fleeing | AiState::Migrating | AiState::Hooked)
        {
            return;
        }

        let roll = frenzy::evaluate(actor, &snapshot.actors, profile.detection_range, &self.config, rng);
        if roll.joined {
            frenzy::apply(actor, &roll);
            actor.strike_budget = actor.strike_budget.max(frenzy::frenzied_strike_budget(rng));
            effects.push(SideEffect::EnteredFrenzy);
        }
    }

    /// Clear targets the world no longer contains; never panic on them
    fn validate_target(&self, actor: &mut Predator, snapshot: &WorldSnapshot) {
        let lost = match actor.target {
            Some(Target::Lure) => snapshot.lure.is_none(),
            Some(Target::Prey { school, .. }) => {
                snapshot.school(school).map_or(true, |s| !s.is_alive())
            }
            None => false,
        };

        if lost {
            tracing::warn!(actor = ?actor.id, state = ?actor.state(), "target lost, decaying to idle");
            actor.clear_target();
            if matches!(
                actor.state(),
                AiState::Interested | AiState::Chasing | AiState::Striking | AiState::HuntingPrey
            ) {
                actor.set_state(AiState::Idle);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn evaluate_state(
        &self,
        actor: &mut Predator,
        profile: &SpeciesProfile,
        behavior: &dyn SpeciesBehavior,
        snapshot: &WorldSnapshot,
        actor_depth: f32,
        zone: DepthZone,
        rng: &mut impl Rng,
        effects: &mut Vec<SideEffect>,
    ) {
        match actor.state() {
            AiState::Idle => {
                self.evaluate_idle(actor, profile, behavior, snapshot, actor_depth, zone, rng)
            }
            AiState::Interested => self.evaluate_interested(actor, profile, behavior, snapshot, zone, rng),
            AiState::Chasing => self.evaluate_chasing(actor, profile, snapshot, zone, rng, effects),
            AiState::Striking => self.evaluate_striking(actor, snapshot),
            AiState::HuntingPrey => self.evaluate_hunting(actor, profile, snapshot, effects),
            AiState::Feeding => self.evaluate_feeding(actor, profile, snapshot),
            AiState::Fleeing => self.evaluate_fleeing(actor),
            AiState::Hooked | AiState::Migrating => {}
        }
    }

    fn evaluate_idle(
        &self,
        actor: &mut Predator,
        profile: &SpeciesProfile,
        behavior: &dyn SpeciesBehavior,
        snapshot: &WorldSnapshot,
        actor_depth: f32,
        zone: DepthZone,
        rng: &mut impl Rng,
    ) {
        // Occasional new cruising heading
        if actor.wander_dir == Vec2::ZERO || rng.gen_bool(0.2) {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            actor.wander_dir = Vec2::new(angle.cos(), angle.sin());
        }

        // Live prey outranks the lure when both are viable, but only
        // probabilistically so a school nearby does not make a fish
        // permanently lure-proof
        if let Some((school, score)) = perception::best_school(actor, profile, &snapshot.schools) {
            if score > self.config.hunt_threshold && rng.gen_bool(score.min(1.0) as f64) {
                if let Some((member, _)) = school.nearest_member(actor.position) {
                    actor.target = Some(Target::Prey { school: school.id, member });
                    actor.set_state(AiState::HuntingPrey);
                    return;
                }
            }
        }

        let Some(lure) = &snapshot.lure else { return };
        let dist = distance(actor.position, lure.position);

        // Frenzied fish strike upward at a lure hanging over them
        if actor.frenzy.active
            && actor_depth - lure.depth > 2.0
            && dist <= profile.detection_range
            && rng.gen_bool(self.config.vertical_strike_chance)
        {
            self.begin_chase(actor, behavior, rng, true);
            return;
        }

        // Auto-engage: a lure moving exactly how this fish likes to swim
        // is irresistible, no scoring involved
        if perception::speed_matches(actor, lure, self.config.auto_engage_speed_tolerance)
            && dist < profile.detection_range * self.config.auto_engage_distance_factor
        {
            actor.engaged = true;
            actor.strike_budget = rng.gen_range(ENGAGE_STRIKE_BUDGET.0..=ENGAGE_STRIKE_BUDGET.1);
            self.begin_chase(actor, behavior, rng, false);
            return;
        }

        let score = perception::interest_score(actor, actor_depth, profile, lure);
        if score > self.config.interest_threshold_in(zone) {
            if dist < profile.detection_range * self.config.chase_distance_factor {
                actor.strike_budget = actor.strike_budget.max(1);
                self.begin_chase(actor, behavior, rng, false);
            } else {
                actor.target = Some(Target::Lure);
                actor.set_state(AiState::Interested);
            }
        }
    }

    fn begin_chase(
        &self,
        actor: &mut Predator,
        behavior: &dyn SpeciesBehavior,
        rng: &mut impl Rng,
        from_frenzy: bool,
    ) {
        actor.target = Some(Target::Lure);
        if from_frenzy || actor.strike_budget == 0 {
            actor.strike_budget = actor.strike_budget.max(1);
        }
        behavior.on_chase_start(actor, rng);
        actor.set_state(AiState::Chasing);
    }

    fn evaluate_interested(
        &self,
        actor: &mut Predator,
        profile: &SpeciesProfile,
        behavior: &dyn SpeciesBehavior,
        snapshot: &WorldSnapshot,
        zone: DepthZone,
        rng: &mut impl Rng,
    ) {
        let Some(lure) = &snapshot.lure else {
            actor.clear_target();
            actor.set_state(AiState::Idle);
            return;
        };

        let dist = distance(actor.position, lure.position);
        if dist > profile.detection_range * self.config.lose_interest_factor {
            actor.clear_target();
            actor.set_state(AiState::Idle);
            return;
        }

        // Persistence check each cooldown tick: bold fish keep coming
        let aggression = actor.effective_aggression(zone, &self.config);
        if rng.gen_bool(aggression as f64) {
            if dist < profile.detection_range * self.config.chase_distance_factor {
                actor.strike_budget = actor.strike_budget.max(1);
                self.begin_chase(actor, behavior, rng, false);
            }
        } else {
            actor.clear_target();
            actor.set_state(AiState::Idle);
        }
    }

    fn evaluate_chasing(
        &self,
        actor: &mut Predator,
        profile: &SpeciesProfile,
        snapshot: &WorldSnapshot,
        zone: DepthZone,
        rng: &mut impl Rng,
        effects: &mut Vec<SideEffect>,
    ) {
        let Some(lure) = snapshot.lure else {
            actor.clear_target();
            actor.set_state(AiState::Idle);
            return;
        };

        let dist = distance(actor.position, lure.position);
        if !actor.engaged && dist > profile.detection_range * self.config.lose_interest_factor {
            actor.clear_target();
            actor.set_state(AiState::Idle);
            return;
        }

        // Circlers are still making up their mind
        if actor.circle_timer > 0.0 {
            return;
        }

        if dist <= profile.strike_distance {
            self.attempt_strike(actor, zone, &lure, snapshot, rng, effects);
        }
    }

    fn attempt_strike(
        &self,
        actor: &mut Predator,
        zone: DepthZone,
        lure: &LureState,
        snapshot: &WorldSnapshot,
        rng: &mut impl Rng,
        effects: &mut Vec<SideEffect>,
    ) {
        let mut chance = actor.effective_aggression(zone, &self.config) * self.config.strike_multiplier;
        if perception::lure_inside_school(lure, &snapshot.schools) {
            chance += self.config.school_confusion_bonus;
        }
        if actor.frenzy.active {
            chance += self.config.frenzy_strike_bonus;
        }

        actor.strike_budget = actor.strike_budget.saturating_sub(1);

        if rng.gen_bool(chance.clamp(0.05, 0.98) as f64) {
            effects.push(SideEffect::StrikeAttempted);
            actor.strike_window = self.config.strike_window;
            actor.set_state(AiState::Striking);
        } else if actor.strike_budget == 0 {
            self.start_fleeing(actor, lure.position);
        }
        // Budget remaining: stay in the chase and line up another pass
    }

    fn evaluate_striking(&self, actor: &mut Predator, snapshot: &WorldSnapshot) {
        let Some(lure) = snapshot.lure else {
            actor.clear_target();
            actor.set_state(AiState::Idle);
            return;
        };

        // Hooked is only entered through confirm_hookset. An expired
        // window means the hook never landed.
        if actor.strike_window <= 0.0 {
            if actor.strike_budget > 0 {
                actor.set_state(AiState::Chasing);
            } else {
                self.start_fleeing(actor, lure.position);
            }
        }
    }

    fn evaluate_hunting(
        &self,
        actor: &mut Predator,
        profile: &SpeciesProfile,
        snapshot: &WorldSnapshot,
        effects: &mut Vec<SideEffect>,
    ) {
        let Some(Target::Prey { school, member }) = actor.target else {
            actor.clear_target();
            actor.set_state(AiState::Idle);
            return;
        };
        let Some(school_ref) = snapshot.school(school) else {
            actor.clear_target();
            actor.set_state(AiState::Idle);
            return;
        };

        // Retarget if the chosen member was eaten or scattered
        let target_pos = match school_ref.members.get(member) {
            Some(m) if m.visible && !m.consumed => m.position,
            _ => match school_ref.nearest_member(actor.position) {
                Some((idx, pos)) => {
                    actor.target = Some(Target::Prey { school, member: idx });
                    pos
                }
                None => {
                    actor.clear_target();
                    actor.set_state(AiState::Idle);
                    return;
                }
            },
        };

        let Some(Target::Prey { member, .. }) = actor.target else { return };
        if distance(actor.position, target_pos) <= self.config.catch_radius {
            effects.push(SideEffect::PreyConsumed { school, member });
            actor.set_hunger(actor.hunger() - profile.nutrition_value(school_ref.species));
            actor.feed_timer = self.config.feed_duration;
            actor.clear_target();
            actor.set_state(AiState::Feeding);
        }
    }

    fn evaluate_feeding(
        &self,
        actor: &mut Predator,
        profile: &SpeciesProfile,
        snapshot: &WorldSnapshot,
    ) {
        if actor.feed_timer > 0.0 {
            return;
        }

        if actor.hunger() > self.config.rehunt_hunger {
            if let Some((school, score)) = perception::best_school(actor, profile, &snapshot.schools) {
                if score > self.config.hunt_threshold {
                    if let Some((member, _)) = school.nearest_member(actor.position) {
                        actor.target = Some(Target::Prey { school: school.id, member });
                        actor.set_state(AiState::HuntingPrey);
                        return;
                    }
                }
            }
        }
        actor.set_state(AiState::Idle);
    }

    fn evaluate_fleeing(&self, actor: &mut Predator) {
        let settled = actor.flee_timer <= 0.0
            || actor
                .flee_origin
                .is_some_and(|origin| distance(actor.position, origin) > self.config.flee_safety_margin);
        if settled {
            actor.flee_origin = None;
            actor.set_state(AiState::Idle);
        }
    }

    fn start_fleeing(&self, actor: &mut Predator, stimulus: Vec2) {
        actor.clear_target();
        actor.flee_timer = self.config.flee_duration;
        actor.flee_origin = Some(stimulus);
        actor.set_state(AiState::Fleeing);
    }

    #[allow(clippy::too_many_arguments)]
    fn movement_for(
        &self,
        actor: &mut Predator,
        behavior: &dyn SpeciesBehavior,
        snapshot: &WorldSnapshot,
        zone: DepthZone,
        dt: f32,
        rng: &mut impl Rng,
        effects: &mut Vec<SideEffect>,
    ) -> Vec2 {
        let base = actor.personality.preferred_speed;
        let zone_mult = self.config.zone_speed_mult(zone);

        match actor.state() {
            AiState::Idle => behavior.idle_movement(actor, base * IDLE_SPEED_MULT * zone_mult),
            AiState::Interested => match snapshot.lure {
                Some(lure) => {
                    toward(actor.position, lure.position, base * INTERESTED_SPEED_MULT * zone_mult)
                }
                None => Vec2::ZERO,
            },
            AiState::Chasing => {
                let Some(lure) = snapshot.lure else { return Vec2::ZERO };
                let speed = base * CHASING_SPEED_MULT * zone_mult;
                match behavior.chase_movement(actor, lure.position, speed, dt, rng, effects) {
                    ChaseAction::Pursue(v) | ChaseAction::Evaluate(v) => v,
                    ChaseAction::Abandon => {
                        actor.clear_target();
                        actor.set_state(AiState::Idle);
                        Vec2::ZERO
                    }
                }
            }
            AiState::Striking => match snapshot.lure {
                Some(lure) => toward(
                    actor.position,
                    lure.position,
                    base * behavior.strike_speed_mult() * zone_mult,
                ),
                None => Vec2::ZERO,
            },
            AiState::Hooked | AiState::Feeding => Vec2::ZERO,
            AiState::Fleeing => {
                let speed = base * FLEEING_SPEED_MULT * zone_mult;
                match actor.flee_origin {
                    Some(origin) => direction_to(origin, actor.position) * speed,
                    None => actor.wander_dir * speed,
                }
            }
            AiState::HuntingPrey => {
                let Some(Target::Prey { school, member }) = actor.target else { return Vec2::ZERO };
                let pos = snapshot
                    .school(school)
                    .and_then(|s| s.members.get(member))
                    .map(|m| m.position);
                match pos {
                    Some(p) => toward(actor.position, p, base * behavior.hunting_speed_mult() * zone_mult),
                    None => Vec2::ZERO,
                }
            }
            AiState::Migrating => {
                let Some(edge) = actor.migration_edge else { return Vec2::ZERO };
                let edge_x = snapshot.field.edge_x(edge);
                // Announce the exit once per migration; the host treats
                // it as a despawn signal
                if (actor.position.x - edge_x).abs() <= self.config.edge_margin
                    && !actor.leaving_announced
                {
                    actor.leaving_announced = true;
                    effects.push(SideEffect::LeavingArea);
                }
                let goal = Vec2::new(edge_x, actor.position.y);
                // Constant high-speed exit, not zone-scaled
                toward(actor.position, goal, base * self.config.migration_speed_mult)
            }
        }
    }
}
