//! Fight session - the tension/energy minigame after a hookset
//!
//! An independent tick-based state machine created when a strike
//! converts into a hookset. It models line tension against the fish's
//! strength and fatigue and resolves exactly once: landed, escaped, or
//! line broken. Abandonment (scene teardown, player quit) is not a
//! resolution; the host just drops the session and releases the actor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::actor::Predator;
use crate::core::config::FightConfig;
use crate::core::types::{ActorId, SizeCategory, Species};

/// Tackle parameters owned by the external gear model
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TackleParams {
    /// Rated breaking strength of the line
    pub line_test_strength: f32,
    /// Drag multiplier, ~0.5 loose to ~1.5 locked down
    pub drag_setting: f32,
    /// Rod/leader shock absorption multiplier on the break threshold
    pub shock_absorption: f32,
}

/// Per-tick player command
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FightInput {
    pub reel: bool,
}

/// Phase of an active fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightPhase {
    /// Initial-shock grace period right after the hook lands
    HookSet,
    /// Steady pulling contest
    Fighting,
    /// Violent burst with a hook-spit chance
    Thrashing,
    /// Exhausted; resistance collapses
    GivingUp,
}

/// Terminal result of a fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightOutcome {
    Landed { points: u32 },
    Escaped,
    LineBroken,
}

/// Per-tick fight summary returned to the host
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FightStatus {
    pub phase: FightPhase,
    pub tension: f32,
    pub energy: f32,
    pub remaining_distance: f32,
    pub resolution: Option<FightOutcome>,
}

/// True when the force on the line exceeds what the tackle can take
///
/// The shock absorption multiplier and the safety margin scale the
/// rated test strength into the effective break threshold.
pub fn line_breaks(
    effective_force: f32,
    line_test_strength: f32,
    shock_absorption: f32,
    break_margin: f32,
) -> bool {
    effective_force > line_test_strength * shock_absorption * break_margin
}

/// One hooked fish fighting the line
#[derive(Debug, Clone)]
pub struct FightSession {
    actor_id: ActorId,
    species: Species,
    size: SizeCategory,
    weight: f32,
    tackle: TackleParams,
    config: FightConfig,

    phase: FightPhase,
    tension: f32,
    energy: f32,
    strength: f32,
    remaining_distance: f32,
    elapsed: f32,
    phase_time: f32,
    next_thrash_in: f32,
    thrash_remaining: f32,
    last_reel_at: f32,
    resolution: Option<FightOutcome>,
}

impl FightSession {
    /// Open a fight for a just-hooked fish
    ///
    /// `depth` is the fish's depth in meters at the hookset; it sets how
    /// much line has to be recovered.
    pub fn new(
        actor: &Predator,
        depth: f32,
        tackle: TackleParams,
        config: FightConfig,
    ) -> Self {
        let health_factor = actor.health() / 100.0;
        let hunger_factor = actor.hunger() / 100.0;
        let condition = (health_factor + (1.0 - hunger_factor)) / 2.0;

        let strength = (actor.weight / 5.0) * condition;
        let energy = 100.0 - (1.0 - condition) * 30.0;
        let remaining_distance = (depth * config.line_per_depth).max(1.0);
        let tension = config.baseline_tension;

        tracing::debug!(
            actor = ?actor.id,
            strength,
            energy,
            remaining_distance,
            "fight opened"
        );

        Self {
            actor_id: actor.id,
            species: actor.species,
            size: actor.size_category(),
            weight: actor.weight,
            tackle,
            config,
            phase: FightPhase::HookSet,
            tension,
            energy,
            strength,
            remaining_distance,
            elapsed: 0.0,
            phase_time: 0.0,
            next_thrash_in: 0.0,
            thrash_remaining: 0.0,
            last_reel_at: f32::NEG_INFINITY,
            resolution: None,
        }
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn phase(&self) -> FightPhase {
        self.phase
    }

    pub fn resolution(&self) -> Option<FightOutcome> {
        self.resolution
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Force currently on the line, in the same units as test strength
    pub fn effective_force(&self) -> f32 {
        self.tension * self.config.tension_to_force
    }

    /// Discard the fight without a resolution
    ///
    /// Used when the host tears the scene down mid-fight. The actor is
    /// returned to idle separately via `DecisionEngine::release_from_fight`.
    pub fn abandon(self) {
        tracing::debug!(actor = ?self.actor_id, "fight abandoned");
    }

    /// Advance the fight by one tick
    ///
    /// After resolution the session is inert: further ticks return the
    /// final status unchanged.
    pub fn tick(&mut self, input: FightInput, dt: f32, rng: &mut impl Rng) -> FightStatus {
        if self.resolution.is_some() {
            return self.status();
        }

        self.elapsed += dt;
        self.phase_time += dt;

        // Natural slack
        self.tension -= self.config.tension_decay * dt;

        let pull = self.strength * (self.energy / 100.0);

        match self.phase {
            FightPhase::HookSet => {
                self.tension = self.tension.max(self.config.hookset_tension);
                if self.phase_time >= self.config.hookset_duration {
                    self.enter_fighting(rng);
                }
            }
            FightPhase::Fighting => {
                self.tension += pull * self.config.pull_tension_rate * self.tackle.drag_setting * dt;
                self.remaining_distance += pull * self.config.run_rate * dt;
                self.drain_energy(dt);

                self.next_thrash_in -= dt;
                if self.next_thrash_in <= 0.0 {
                    self.enter_thrashing(rng);
                }
            }
            FightPhase::Thrashing => {
                self.tension += (pull * self.config.pull_tension_rate * self.tackle.drag_setting
                    + self.config.thrash_tension_rate)
                    * dt;
                self.remaining_distance += pull * self.config.run_rate * 2.0 * dt;
                self.drain_energy(dt * 1.5);

                self.thrash_remaining -= dt;
                if self.thrash_remaining <= 0.0 {
                    self.enter_fighting(rng);
                }
            }
            FightPhase::GivingUp => {
                // Barely any pull left; the fish recovers slowly, so
                // dawdling can bring the fight back
                self.tension += pull * 0.3 * self.config.pull_tension_rate * dt;
                self.energy = (self.energy + self.config.energy_recovery_rate * dt).clamp(0.0, 100.0);
                if self.energy > self.config.giving_up_energy * 1.5 {
                    self.enter_fighting(rng);
                }
            }
        }

        if matches!(self.phase, FightPhase::Fighting | FightPhase::Thrashing)
            && self.energy < self.config.giving_up_energy
        {
            tracing::debug!(actor = ?self.actor_id, energy = self.energy, "fish giving up");
            self.phase = FightPhase::GivingUp;
            self.phase_time = 0.0;
        }

        self.apply_reel(input);

        self.tension = self.tension.max(0.0);
        self.energy = self.energy.clamp(0.0, 100.0);

        // Break beats landing: both checked after all tension changes
        if line_breaks(
            self.effective_force(),
            self.tackle.line_test_strength,
            self.tackle.shock_absorption,
            self.config.break_margin,
        ) {
            self.resolve(FightOutcome::LineBroken);
        } else if self.remaining_distance <= 0.0 {
            let points = (self.weight * self.config.points_per_kg
                * self.size.point_multiplier())
            .round() as u32;
            self.resolve(FightOutcome::Landed { points });
        }

        self.status()
    }

    fn status(&self) -> FightStatus {
        FightStatus {
            phase: self.phase,
            tension: self.tension,
            energy: self.energy,
            remaining_distance: self.remaining_distance.max(0.0),
            resolution: self.resolution,
        }
    }

    fn enter_fighting(&mut self, rng: &mut impl Rng) {
        if self.phase == FightPhase::HookSet {
            self.tension = self.tension.min(self.config.baseline_tension * 1.5);
        }
        self.phase = FightPhase::Fighting;
        self.phase_time = 0.0;
        self.next_thrash_in =
            rng.gen_range(self.config.thrash_interval_min..=self.config.thrash_interval_max);
    }

    fn enter_thrashing(&mut self, rng: &mut impl Rng) {
        self.phase = FightPhase::Thrashing;
        self.phase_time = 0.0;
        self.thrash_remaining =
            rng.gen_range(self.config.thrash_duration_min..=self.config.thrash_duration_max);

        // Hook-spit roll, once per burst, scaled by how lively the fish
        // still is
        let chance = self.config.base_escape_chance(self.size) * (0.5 + self.energy as f64 / 100.0);
        if rng.gen_bool(chance.clamp(0.0, 1.0)) {
            self.resolve(FightOutcome::Escaped);
        }
    }

    fn drain_energy(&mut self, dt: f32) {
        let drain = (self.tension / 100.0) * self.config.energy_drain_rate * dt;
        self.energy = (self.energy - drain).clamp(0.0, 100.0);
    }

    fn apply_reel(&mut self, input: FightInput) {
        if !input.reel {
            return;
        }
        // Rate-limited: spamming faster than the minimum interval does
        // nothing
        if self.elapsed - self.last_reel_at < self.config.min_reel_interval {
            return;
        }
        self.last_reel_at = self.elapsed;
        self.tension += self.config.reel_tension;

        let mult = if self.phase == FightPhase::GivingUp {
            self.config.giving_up_reel_bonus
        } else {
            1.0
        };
        self.remaining_distance -= self.config.reel_distance * mult;
    }

    fn resolve(&mut self, outcome: FightOutcome) {
        if self.resolution.is_none() {
            tracing::debug!(actor = ?self.actor_id, ?outcome, "fight resolved");
            self.resolution = Some(outcome);
        }
    }
}
