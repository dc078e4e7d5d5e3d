//! Perception scoring - how attractive the lure and live prey look
//!
//! Pure functions over snapshot data. The decision engine compares these
//! scores against zone-adjusted thresholds; nothing here rolls dice.

use crate::actor::Predator;
use crate::core::geometry::{clamp01, distance};
use crate::core::types::SizeCategory;
use crate::simulation::constants::*;
use crate::simulation::snapshot::{LureMotion, LureState, PreySchool};
use crate::species::profile::SpeciesProfile;

/// How enticing a lure motion pattern looks to a predator
pub fn motion_attractiveness(motion: LureMotion) -> f32 {
    match motion {
        LureMotion::Jigging => 1.0,
        LureMotion::Retrieving => 0.8,
        LureMotion::Dropping => 0.6,
        LureMotion::Idle => 0.3,
    }
}

/// Weighted interest score for the lure, 0.0 when out of sensing range
///
/// Blends distance falloff, speed match against the preferred swim speed,
/// depth proximity, lure action, hunger, and alertness, then amplifies
/// by frenzy intensity.
pub fn interest_score(
    actor: &Predator,
    actor_depth: f32,
    profile: &SpeciesProfile,
    lure: &LureState,
) -> f32 {
    let dist = distance(actor.position, lure.position);
    if dist > profile.detection_range {
        return 0.0;
    }
    if (lure.depth - actor_depth).abs() > profile.vertical_detection_range {
        return 0.0;
    }

    let distance_factor = 1.0 - dist / profile.detection_range;

    let preferred = actor.personality.preferred_speed.max(0.1);
    let speed_factor = 1.0 - ((lure.speed - preferred).abs() / preferred).min(1.0);

    let depth_factor = 1.0
        - ((lure.depth - actor.personality.preferred_depth).abs()
            / profile.vertical_detection_range)
            .min(1.0);

    let hunger_factor = actor.hunger() / 100.0;

    let score = WEIGHT_DISTANCE * distance_factor
        + WEIGHT_SPEED_MATCH * speed_factor
        + WEIGHT_DEPTH_MATCH * depth_factor
        + WEIGHT_MOTION * motion_attractiveness(lure.motion)
        + WEIGHT_HUNGER * hunger_factor
        + WEIGHT_ALERTNESS * actor.personality.alertness;

    let amplified = score * (1.0 + actor.frenzy.intensity * FRENZY_SCORE_AMPLIFICATION);
    clamp01(amplified)
}

/// Whether the lure speed is close enough to the preferred speed for the
/// guaranteed auto-engage shortcut
pub fn speed_matches(actor: &Predator, lure: &LureState, tolerance: f32) -> bool {
    (lure.speed - actor.personality.preferred_speed).abs() <= tolerance
}

/// Weighted hunt score for a prey school, 0.0 when out of range or dead
pub fn hunt_score(actor: &Predator, profile: &SpeciesProfile, school: &PreySchool) -> f32 {
    let Some((_, nearest)) = school.nearest_member(actor.position) else {
        return 0.0;
    };
    let dist = distance(actor.position, nearest);
    if dist > profile.detection_range {
        return 0.0;
    }

    let hunger_factor = actor.hunger() / 100.0;
    let distance_factor = 1.0 - dist / profile.detection_range;
    let diet_factor = profile.diet_weight(school.species);
    let size_factor = match actor.size_category() {
        SizeCategory::Large | SizeCategory::Trophy => 1.0,
        _ => 0.0,
    };

    clamp01(
        HUNT_WEIGHT_HUNGER * hunger_factor
            + HUNT_WEIGHT_DISTANCE * distance_factor
            + HUNT_WEIGHT_DIET * diet_factor
            + HUNT_WEIGHT_SIZE * size_factor,
    )
}

/// Best huntable school by score, with the score itself
pub fn best_school<'a>(
    actor: &Predator,
    profile: &SpeciesProfile,
    schools: &'a [PreySchool],
) -> Option<(&'a PreySchool, f32)> {
    schools
        .iter()
        .map(|s| (s, hunt_score(actor, profile, s)))
        .filter(|(_, score)| *score > 0.0)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

/// True when the lure sits inside any living school's area
///
/// A lure swimming among real prey gets mistaken for one, boosting
/// strike success.
pub fn lure_inside_school(lure: &LureState, schools: &[PreySchool]) -> bool {
    schools.iter().any(|s| s.contains(lure.position))
}
