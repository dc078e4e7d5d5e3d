//! Predator actor state
//!
//! One `Predator` per simulated fish. The decision engine is the only
//! writer of the AI state; everything that can drift out of range
//! (hunger, health) is clamped behind accessors.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::BehaviorConfig;
use crate::core::types::{ActorId, DepthZone, FieldEdge, SchoolId, SizeCategory, Species, Tick, Vec2};
use crate::core::Result;
use crate::species::profile::{BehaviorKind, ProfileRegistry};

/// Behavioral states of the decision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiState {
    Idle,
    Interested,
    Chasing,
    Striking,
    Hooked,
    Fleeing,
    HuntingPrey,
    Feeding,
    Migrating,
}

impl AiState {
    pub const ALL: [AiState; 9] = [
        AiState::Idle,
        AiState::Interested,
        AiState::Chasing,
        AiState::Striking,
        AiState::Hooked,
        AiState::Fleeing,
        AiState::HuntingPrey,
        AiState::Feeding,
        AiState::Migrating,
    ];

    /// States that count as excited for frenzy detection
    pub fn is_excited(&self) -> bool {
        matches!(
            self,
            AiState::Interested
                | AiState::Chasing
                | AiState::Striking
                | AiState::HuntingPrey
                | AiState::Feeding
        )
    }

    /// Legal state-machine edges
    ///
    /// Hooked is only reachable from Striking, which is what guarantees a
    /// fish can never be hooked without a strike.
    pub fn can_transition(&self, to: AiState) -> bool {
        if *self == to {
            return true;
        }
        use AiState::*;
        match (*self, to) {
            (Idle, Interested | Chasing | HuntingPrey | Migrating) => true,
            (Interested, Idle | Chasing | Migrating) => true,
            (Chasing, Idle | Striking | Fleeing | Migrating) => true,
            (Striking, Chasing | Fleeing | Hooked | Idle) => true,
            (Hooked, Idle) => true,
            (Fleeing, Idle | Migrating) => true,
            (HuntingPrey, Idle | Feeding | Migrating) => true,
            (Feeding, Idle | HuntingPrey | Migrating) => true,
            (Migrating, Idle) => true,
            _ => false,
        }
    }
}

/// What the actor is currently pursuing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Target {
    Lure,
    Prey { school: SchoolId, member: usize },
}

/// Fixed per-individual traits rolled at spawn from species ranges
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Personality {
    /// 0.5-1.0, scales perception scoring
    pub alertness: f32,
    /// 0.5-1.0, base willingness to commit to a strike
    pub aggression: f32,
    /// World units per second the fish likes to swim at
    pub preferred_speed: f32,
    /// Meters of depth the fish likes to hold at
    pub preferred_depth: f32,
}

impl Personality {
    pub fn roll(profile: &crate::species::profile::SpeciesProfile, rng: &mut impl Rng) -> Self {
        let (speed_lo, speed_hi) = profile.speed_range;
        let (depth_lo, depth_hi) = profile.depth_range;
        Self {
            alertness: rng.gen_range(0.5..=1.0),
            aggression: rng.gen_range(0.5..=1.0),
            preferred_speed: rng.gen_range(speed_lo..=speed_hi),
            preferred_depth: rng.gen_range(depth_lo..=depth_hi),
        }
    }
}

/// Social amplification state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrenzyState {
    pub active: bool,
    /// 0.0-1.0, scaled by excited neighbor count
    pub intensity: f32,
    /// Seconds of frenzy remaining
    pub remaining: f32,
}

impl FrenzyState {
    pub fn decay(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            *self = Self::default();
        }
    }
}

/// One simulated predator fish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predator {
    pub id: ActorId,
    pub species: Species,
    pub position: Vec2,
    pub weight: f32,
    pub age_ticks: Tick,
    pub personality: Personality,
    pub frenzy: FrenzyState,

    hunger: f32,
    health: f32,
    state: AiState,

    // Decision-engine runtime state. Crate-visible so the engine can
    // drive it without exposing it to hosts.
    pub(crate) target: Option<Target>,
    pub(crate) next_decision_at: f64,
    pub(crate) last_update_at: Option<f64>,
    pub(crate) strike_budget: u8,
    pub(crate) engaged: bool,
    pub(crate) strike_window: f32,
    pub(crate) ambush_anchor: Option<Vec2>,
    pub(crate) circle_timer: f32,
    pub(crate) circle_angle: f32,
    pub(crate) migrating: bool,
    pub(crate) migration_edge: Option<FieldEdge>,
    pub(crate) leaving_announced: bool,
    pub(crate) prey_absence: f32,
    pub(crate) above_band_for: f32,
    pub(crate) flee_timer: f32,
    pub(crate) flee_origin: Option<Vec2>,
    pub(crate) feed_timer: f32,
    pub(crate) wander_dir: Vec2,
}

impl Predator {
    /// Spawn a predator with personality rolled from the species profile
    ///
    /// Fails fast if the species has no registered profile.
    pub fn new(
        species: Species,
        position: Vec2,
        weight: f32,
        registry: &ProfileRegistry,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let profile = registry.get(species)?;
        let personality = Personality::roll(profile, rng);
        let ambush_anchor = match profile.behavior {
            BehaviorKind::Ambush => Some(position),
            _ => None,
        };

        Ok(Self {
            id: ActorId::new(),
            species,
            position,
            weight: weight.max(0.1),
            age_ticks: 0,
            personality,
            frenzy: FrenzyState::default(),
            hunger: rng.gen_range(20.0..60.0),
            health: 100.0,
            state: AiState::Idle,
            target: None,
            next_decision_at: 0.0,
            last_update_at: None,
            strike_budget: 1,
            engaged: false,
            strike_window: 0.0,
            ambush_anchor,
            circle_timer: 0.0,
            circle_angle: 0.0,
            migrating: false,
            migration_edge: None,
            leaving_announced: false,
            prey_absence: 0.0,
            above_band_for: 0.0,
            flee_timer: 0.0,
            flee_origin: None,
            feed_timer: 0.0,
            wander_dir: Vec2::ZERO,
        })
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    pub fn target(&self) -> Option<Target> {
        self.target
    }

    pub fn is_migrating(&self) -> bool {
        self.migrating
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn size_category(&self) -> SizeCategory {
        SizeCategory::from_weight(self.weight)
    }

    /// Clamped hunger write, used at every mutation boundary
    pub fn set_hunger(&mut self, hunger: f32) {
        self.hunger = hunger.clamp(0.0, 100.0);
    }

    pub fn set_health(&mut self, health: f32) {
        self.health = health.clamp(0.0, 100.0);
    }

    /// Base aggression plus zone bonus, clamped to [0.1, 1.0]
    pub fn effective_aggression(&self, zone: DepthZone, config: &BehaviorConfig) -> f32 {
        (self.personality.aggression + config.zone_aggression_bonus(zone)).clamp(0.1, 1.0)
    }

    /// State mutation, decision-engine only
    ///
    /// Illegal edges are a bug in the engine, not a runtime condition.
    pub(crate) fn set_state(&mut self, to: AiState) {
        if self.state == to {
            return;
        }
        debug_assert!(
            self.state.can_transition(to),
            "illegal transition {:?} -> {to:?}",
            self.state
        );
        tracing::debug!(actor = ?self.id, from = ?self.state, to = ?to, "state transition");
        self.state = to;
    }

    pub(crate) fn clear_target(&mut self) {
        self.target = None;
        self.engaged = false;
        self.circle_timer = 0.0;
    }
}
