//! Species profile data - perception ranges, preferences, and diets
//!
//! Profiles are data only; the behavioral overrides they select live in
//! the sibling behavior modules. A missing profile is a configuration
//! fault surfaced at actor construction, never mid-simulation.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{PreySpecies, Species};
use crate::core::{Result, SimError};

/// Which behavioral override family a species belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorKind {
    /// Holds near an anchor point and strikes explosively
    Ambush,
    /// Circles and evaluates before committing
    Circler,
    /// Straightforward pursuit, bound to a depth band
    Pursuit,
}

/// Static behavioral record for one species
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesProfile {
    pub species: Species,
    pub behavior: BehaviorKind,
    /// Horizontal range at which the lure or prey can be sensed
    pub detection_range: f32,
    /// Maximum vertical separation that still registers
    pub vertical_detection_range: f32,
    /// Distance at which a chase converts into a strike attempt
    pub strike_distance: f32,
    /// Preferred swim speed range, used to roll personality
    pub speed_range: (f32, f32),
    /// Preferred depth range in meters, used to roll personality
    pub depth_range: (f32, f32),
    /// Prey species preference weights in [0, 1]
    pub diet_weights: AHashMap<PreySpecies, f32>,
    /// Hunger reduction per prey species eaten (0-100 scale)
    pub nutrition: AHashMap<PreySpecies, f32>,
}

impl SpeciesProfile {
    /// Diet preference for a prey species, 0.0 when not eaten at all
    pub fn diet_weight(&self, prey: PreySpecies) -> f32 {
        self.diet_weights.get(&prey).copied().unwrap_or(0.0)
    }

    /// Nutrition value for a prey species
    pub fn nutrition_value(&self, prey: PreySpecies) -> f32 {
        self.nutrition.get(&prey).copied().unwrap_or(0.0)
    }
}

/// Lookup table of species profiles
///
/// The standard registry covers every supported species; hosts can build
/// a custom one for tuning or tests.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: AHashMap<Species, SpeciesProfile>,
}

impl ProfileRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the standard tuning for all supported species
    pub fn standard() -> Self {
        let mut reg = Self::default();
        for profile in standard_profiles() {
            reg.insert(profile);
        }
        reg
    }

    pub fn insert(&mut self, profile: SpeciesProfile) {
        self.profiles.insert(profile.species, profile);
    }

    /// Fails fast when a species has no registered profile
    pub fn get(&self, species: Species) -> Result<&SpeciesProfile> {
        self.profiles
            .get(&species)
            .ok_or(SimError::MissingProfile(species))
    }
}

fn diet(entries: &[(PreySpecies, f32)]) -> AHashMap<PreySpecies, f32> {
    entries.iter().copied().collect()
}

fn standard_profiles() -> Vec<SpeciesProfile> {
    use PreySpecies::*;

    vec![
        SpeciesProfile {
            species: Species::NorthernPike,
            behavior: BehaviorKind::Ambush,
            detection_range: 180.0,
            vertical_detection_range: 60.0,
            strike_distance: 60.0,
            speed_range: (1.2, 2.4),
            depth_range: (2.0, 8.0),
            diet_weights: diet(&[(Minnow, 0.8), (Shad, 0.9), (Shiner, 0.7), (Crayfish, 0.2)]),
            nutrition: diet(&[(Minnow, 18.0), (Shad, 30.0), (Shiner, 22.0), (Crayfish, 12.0)]),
        },
        SpeciesProfile {
            species: Species::Muskellunge,
            behavior: BehaviorKind::Ambush,
            detection_range: 200.0,
            vertical_detection_range: 70.0,
            strike_distance: 65.0,
            speed_range: (1.0, 2.2),
            depth_range: (3.0, 10.0),
            diet_weights: diet(&[(Minnow, 0.5), (Shad, 1.0), (Shiner, 0.8), (Crayfish, 0.1)]),
            nutrition: diet(&[(Minnow, 15.0), (Shad, 32.0), (Shiner, 24.0), (Crayfish, 10.0)]),
        },
        SpeciesProfile {
            species: Species::LargemouthBass,
            behavior: BehaviorKind::Circler,
            detection_range: 150.0,
            vertical_detection_range: 50.0,
            strike_distance: 25.0,
            speed_range: (1.5, 3.0),
            depth_range: (1.0, 6.0),
            diet_weights: diet(&[(Minnow, 0.9), (Shad, 0.8), (Shiner, 0.9), (Crayfish, 0.7)]),
            nutrition: diet(&[(Minnow, 16.0), (Shad, 26.0), (Shiner, 20.0), (Crayfish, 22.0)]),
        },
        SpeciesProfile {
            species: Species::SmallmouthBass,
            behavior: BehaviorKind::Circler,
            detection_range: 140.0,
            vertical_detection_range: 45.0,
            strike_distance: 25.0,
            speed_range: (1.8, 3.2),
            depth_range: (2.0, 9.0),
            diet_weights: diet(&[(Minnow, 0.8), (Shad, 0.6), (Shiner, 0.8), (Crayfish, 1.0)]),
            nutrition: diet(&[(Minnow, 14.0), (Shad, 22.0), (Shiner, 18.0), (Crayfish, 26.0)]),
        },
        SpeciesProfile {
            species: Species::RainbowTrout,
            behavior: BehaviorKind::Pursuit,
            detection_range: 160.0,
            vertical_detection_range: 40.0,
            strike_distance: 25.0,
            speed_range: (2.0, 3.6),
            depth_range: (8.0, 16.0),
            diet_weights: diet(&[(Minnow, 1.0), (Shad, 0.5), (Shiner, 0.9), (Crayfish, 0.3)]),
            nutrition: diet(&[(Minnow, 20.0), (Shad, 18.0), (Shiner, 22.0), (Crayfish, 12.0)]),
        },
        SpeciesProfile {
            species: Species::Walleye,
            behavior: BehaviorKind::Pursuit,
            detection_range: 170.0,
            vertical_detection_range: 55.0,
            strike_distance: 25.0,
            speed_range: (1.4, 2.8),
            depth_range: (10.0, 20.0),
            diet_weights: diet(&[(Minnow, 0.9), (Shad, 0.7), (Shiner, 1.0), (Crayfish, 0.4)]),
            nutrition: diet(&[(Minnow, 17.0), (Shad, 24.0), (Shiner, 23.0), (Crayfish, 14.0)]),
        },
    ]
}
