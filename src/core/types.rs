//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for predator actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for prey schools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchoolId(pub Uuid);

impl SchoolId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SchoolId {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulation tick counter
pub type Tick = u64;

/// Predator species enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    NorthernPike,
    Muskellunge,
    LargemouthBass,
    SmallmouthBass,
    RainbowTrout,
    Walleye,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::NorthernPike,
        Species::Muskellunge,
        Species::LargemouthBass,
        Species::SmallmouthBass,
        Species::RainbowTrout,
        Species::Walleye,
    ];
}

/// Prey species enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreySpecies {
    Minnow,
    Shad,
    Shiner,
    Crayfish,
}

/// Size class derived from weight; drives escape chances and point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    Trophy,
}

impl SizeCategory {
    /// Classify a weight in kilograms
    pub fn from_weight(weight_kg: f32) -> Self {
        if weight_kg < 1.5 {
            SizeCategory::Small
        } else if weight_kg < 4.0 {
            SizeCategory::Medium
        } else if weight_kg < 8.0 {
            SizeCategory::Large
        } else {
            SizeCategory::Trophy
        }
    }

    /// Point multiplier applied on a landed catch
    pub fn point_multiplier(&self) -> f32 {
        match self {
            SizeCategory::Small => 1.0,
            SizeCategory::Medium => 1.5,
            SizeCategory::Large => 2.0,
            SizeCategory::Trophy => 3.0,
        }
    }
}

/// Vertical zone of the water column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthZone {
    Shallow,
    Mid,
    Deep,
}

/// Horizontal field edge a migrating actor swims toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldEdge {
    Left,
    Right,
}

/// 2D position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0001 {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::default()
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_category_boundaries() {
        assert_eq!(SizeCategory::from_weight(0.5), SizeCategory::Small);
        assert_eq!(SizeCategory::from_weight(1.5), SizeCategory::Medium);
        assert_eq!(SizeCategory::from_weight(4.0), SizeCategory::Large);
        assert_eq!(SizeCategory::from_weight(8.0), SizeCategory::Trophy);
        assert_eq!(SizeCategory::from_weight(14.0), SizeCategory::Trophy);
    }

    #[test]
    fn test_point_multiplier_ordering() {
        assert!(SizeCategory::Trophy.point_multiplier() > SizeCategory::Large.point_multiplier());
        assert!(SizeCategory::Large.point_multiplier() > SizeCategory::Medium.point_multiplier());
        assert!(SizeCategory::Medium.point_multiplier() > SizeCategory::Small.point_multiplier());
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = Vec2::ZERO.normalize();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_actor_id_uniqueness() {
        assert_ne!(ActorId::new(), ActorId::new());
    }
}
