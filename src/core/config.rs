//! Simulation configuration with documented constants
//!
//! All behavioral tuning values are collected here. The probability
//! constants were hand-tuned for feel in the original game; they are
//! defaults, not requirements, and hosts may override any of them.

use serde::{Deserialize, Serialize};

use crate::core::types::DepthZone;

/// Tunables for the per-actor decision engine
///
/// Times are simulated seconds, distances are world units, probabilities
/// are in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    // === DECISION PACING ===
    /// Minimum simulated time between full state re-evaluations
    ///
    /// Movement interpolation still runs every tick; this only throttles
    /// the stochastic transition logic so an actor cannot thrash between
    /// states within a single reaction window.
    pub decision_cooldown: f64,

    /// Seconds without a living visible prey school before an actor
    /// gives up on the area and migrates off-field
    pub food_timeout: f32,

    // === INTEREST / CHASE ===
    /// Base interest score an actor must exceed to react to the lure
    pub interest_threshold: f32,

    /// Added to the interest threshold per zone (negative = easier)
    ///
    /// Feeding is easiest in the shallows and hardest in deep water.
    pub shallow_threshold_shift: f32,
    pub deep_threshold_shift: f32,

    /// Fraction of detection range inside which a scored reaction goes
    /// straight to chasing instead of lingering interested
    pub chase_distance_factor: f32,

    /// Lure speed tolerance (world units/s) for the auto-engage shortcut
    pub auto_engage_speed_tolerance: f32,

    /// Fraction of detection range inside which auto-engage can fire
    pub auto_engage_distance_factor: f32,

    /// Multiple of detection range beyond which a chasing actor loses
    /// the lure entirely
    pub lose_interest_factor: f32,

    // === STRIKE ===
    /// Multiplier on effective aggression for the strike success roll
    pub strike_multiplier: f32,

    /// Strike chance bonus when the lure sits inside a prey school
    /// (the predator mistakes it for real prey)
    pub school_confusion_bonus: f32,

    /// Seconds the engine waits for an external hookset signal after a
    /// successful strike before treating the strike as missed
    pub strike_window: f32,

    // === HUNTING ===
    /// Hunt score an actor must exceed to consider live prey
    pub hunt_threshold: f32,

    /// Distance at which a targeted prey member counts as caught
    pub catch_radius: f32,

    /// Seconds spent feeding after a successful prey catch
    pub feed_duration: f32,

    /// Hunger above which a fed actor goes straight back to hunting
    pub rehunt_hunger: f32,

    // === FLEEING ===
    /// Seconds an actor stays spooked before settling back to idle
    pub flee_duration: f32,

    /// Distance from the spook stimulus at which fleeing ends early
    pub flee_safety_margin: f32,

    // === FRENZY ===
    /// Chance per evaluation to join a feeding frenzy when at least one
    /// excited neighbor is in range
    pub frenzy_join_chance: f64,

    /// Frenzy intensity contributed by each excited neighbor
    pub frenzy_intensity_per_neighbor: f32,

    /// Base frenzy duration in seconds
    pub frenzy_base_duration: f32,

    /// Extra frenzy duration per excited neighbor
    pub frenzy_duration_per_neighbor: f32,

    /// Multiple of detection range scanned for excited neighbors
    pub frenzy_radius_factor: f32,

    /// Strike chance bonus while frenzied
    pub frenzy_strike_bonus: f32,

    /// Chance for a frenzied actor to chase a lure hanging above it,
    /// bypassing interest scoring entirely
    pub vertical_strike_chance: f64,

    // === BIOLOGY ===
    /// Hunger gained per simulated second (0-100 scale)
    pub hunger_rate: f32,

    // === DEPTH ZONES ===
    /// Depth (meters) where the shallow zone ends
    pub shallow_max_depth: f32,

    /// Depth (meters) where the mid zone ends
    pub mid_max_depth: f32,

    /// Depth (meters) of the thermocline pursuit species drift back under
    pub thermocline_depth: f32,

    /// Seconds a pursuit actor may linger above the thermocline before
    /// corrective drift kicks in
    pub thermocline_grace: f32,

    /// Downward drift speed applied while out of the preferred band
    pub thermocline_drift_speed: f32,

    // === MIGRATION ===
    /// Speed multiplier while migrating off-field
    pub migration_speed_mult: f32,

    /// Distance from the field edge at which a migrating actor signals
    /// it is leaving the area
    pub edge_margin: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            decision_cooldown: 0.12,
            food_timeout: 10.0,
            interest_threshold: 0.5,
            shallow_threshold_shift: -0.1,
            deep_threshold_shift: 0.1,
            chase_distance_factor: 0.4,
            auto_engage_speed_tolerance: 0.5,
            auto_engage_distance_factor: 0.8,
            lose_interest_factor: 1.5,
            strike_multiplier: 0.8,
            school_confusion_bonus: 0.2,
            strike_window: 0.6,
            hunt_threshold: 0.35,
            catch_radius: 10.0,
            feed_duration: 1.0,
            rehunt_hunger: 40.0,
            flee_duration: 2.5,
            flee_safety_margin: 120.0,
            frenzy_join_chance: 0.75,
            frenzy_intensity_per_neighbor: 0.3,
            frenzy_base_duration: 5.0,
            frenzy_duration_per_neighbor: 1.5,
            frenzy_radius_factor: 3.0,
            frenzy_strike_bonus: 0.15,
            vertical_strike_chance: 0.3,
            hunger_rate: 0.4,
            shallow_max_depth: 5.0,
            mid_max_depth: 15.0,
            thermocline_depth: 8.0,
            thermocline_grace: 3.0,
            thermocline_drift_speed: 0.6,
            migration_speed_mult: 2.0,
            edge_margin: 20.0,
        }
    }
}

impl BehaviorConfig {
    /// Zone for a depth in meters
    pub fn zone_for(&self, depth: f32) -> DepthZone {
        if depth <= self.shallow_max_depth {
            DepthZone::Shallow
        } else if depth <= self.mid_max_depth {
            DepthZone::Mid
        } else {
            DepthZone::Deep
        }
    }

    /// Interest threshold adjusted for a zone
    pub fn interest_threshold_in(&self, zone: DepthZone) -> f32 {
        match zone {
            DepthZone::Shallow => self.interest_threshold + self.shallow_threshold_shift,
            DepthZone::Mid => self.interest_threshold,
            DepthZone::Deep => self.interest_threshold + self.deep_threshold_shift,
        }
    }

    /// Swim speed multiplier for a zone
    pub fn zone_speed_mult(&self, zone: DepthZone) -> f32 {
        match zone {
            DepthZone::Shallow => 1.3,
            DepthZone::Mid => 1.0,
            DepthZone::Deep => 0.6,
        }
    }

    /// Aggression bonus for a zone, added to base aggression before clamping
    pub fn zone_aggression_bonus(&self, zone: DepthZone) -> f32 {
        match zone {
            DepthZone::Shallow => 0.15,
            DepthZone::Mid => 0.05,
            DepthZone::Deep => 0.0,
        }
    }
}

/// Tunables for the fight (catch minigame) simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightConfig {
    /// Seconds of initial-shock grace after the hookset
    pub hookset_duration: f32,

    /// Elevated base tension held during the hookset phase
    pub hookset_tension: f32,

    /// Tension immediately after the hookset phase ends
    pub baseline_tension: f32,

    /// Natural tension decay per second
    pub tension_decay: f32,

    /// Tension added by one accepted reel input
    pub reel_tension: f32,

    /// Minimum simulated seconds between accepted reel inputs
    ///
    /// Inputs arriving faster than this are dropped, which is what stops
    /// reel spamming from instantly snapping the line.
    pub min_reel_interval: f32,

    /// Line recovered by one accepted reel input (world units)
    pub reel_distance: f32,

    /// Reel distance multiplier once the fish is giving up
    pub giving_up_reel_bonus: f32,

    /// Scales continuous pull (fish strength x energy) into tension/s
    pub pull_tension_rate: f32,

    /// Scales continuous pull into line taken back by the fish (units/s)
    pub run_rate: f32,

    /// Random thrash schedule bounds, seconds between bursts
    pub thrash_interval_min: f32,
    pub thrash_interval_max: f32,

    /// Thrash burst duration bounds, seconds
    pub thrash_duration_min: f32,
    pub thrash_duration_max: f32,

    /// Tension spike applied over a thrash burst, per second
    pub thrash_tension_rate: f32,

    /// Energy below which the fish gives up
    pub giving_up_energy: f32,

    /// Energy drained per second at full tension
    pub energy_drain_rate: f32,

    /// Energy recovered per second while giving up
    pub energy_recovery_rate: f32,

    /// Safety margin applied to line test strength before a break
    pub break_margin: f32,

    /// Converts line tension (0-100+) into force comparable to line
    /// test strength
    pub tension_to_force: f32,

    /// Base hook-spit chance per thrash by size category
    pub escape_chance_small: f64,
    pub escape_chance_medium: f64,
    pub escape_chance_large: f64,
    pub escape_chance_trophy: f64,

    /// World units of line per meter of depth at hookset
    pub line_per_depth: f32,

    /// Points per kilogram of landed fish, before the size multiplier
    pub points_per_kg: f32,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            hookset_duration: 3.0,
            hookset_tension: 45.0,
            baseline_tension: 20.0,
            tension_decay: 6.0,
            reel_tension: 7.0,
            min_reel_interval: 0.25,
            reel_distance: 1.4,
            giving_up_reel_bonus: 2.0,
            pull_tension_rate: 9.0,
            run_rate: 0.8,
            thrash_interval_min: 5.0,
            thrash_interval_max: 7.0,
            thrash_duration_min: 2.0,
            thrash_duration_max: 3.0,
            thrash_tension_rate: 16.0,
            giving_up_energy: 25.0,
            energy_drain_rate: 2.4,
            energy_recovery_rate: 1.0,
            break_margin: 1.2,
            tension_to_force: 0.2,
            escape_chance_small: 0.02,
            escape_chance_medium: 0.05,
            escape_chance_large: 0.10,
            escape_chance_trophy: 0.15,
            line_per_depth: 3.0,
            points_per_kg: 10.0,
        }
    }
}

impl FightConfig {
    /// Base hook-spit chance for a size category
    pub fn base_escape_chance(&self, size: crate::core::types::SizeCategory) -> f64 {
        use crate::core::types::SizeCategory;
        match size {
            SizeCategory::Small => self.escape_chance_small,
            SizeCategory::Medium => self.escape_chance_medium,
            SizeCategory::Large => self.escape_chance_large,
            SizeCategory::Trophy => self.escape_chance_trophy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SizeCategory;

    #[test]
    fn test_zone_boundaries() {
        let cfg = BehaviorConfig::default();
        assert_eq!(cfg.zone_for(2.0), DepthZone::Shallow);
        assert_eq!(cfg.zone_for(5.0), DepthZone::Shallow);
        assert_eq!(cfg.zone_for(10.0), DepthZone::Mid);
        assert_eq!(cfg.zone_for(20.0), DepthZone::Deep);
    }

    #[test]
    fn test_shallow_zone_is_easiest() {
        let cfg = BehaviorConfig::default();
        assert!(cfg.interest_threshold_in(DepthZone::Shallow) < cfg.interest_threshold_in(DepthZone::Mid));
        assert!(cfg.interest_threshold_in(DepthZone::Mid) < cfg.interest_threshold_in(DepthZone::Deep));
        assert!(cfg.zone_speed_mult(DepthZone::Shallow) > cfg.zone_speed_mult(DepthZone::Deep));
    }

    #[test]
    fn test_escape_chance_grows_with_size() {
        let cfg = FightConfig::default();
        assert!(cfg.base_escape_chance(SizeCategory::Trophy) > cfg.base_escape_chance(SizeCategory::Large));
        assert!(cfg.base_escape_chance(SizeCategory::Large) > cfg.base_escape_chance(SizeCategory::Medium));
        assert!(cfg.base_escape_chance(SizeCategory::Medium) > cfg.base_escape_chance(SizeCategory::Small));
    }
}
