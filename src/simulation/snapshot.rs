//! Read-only world snapshot consumed by the decision engine each tick
//!
//! The host assembles one snapshot per tick from state it owns (lure
//! physics, prey flocking, other actors) and passes it to every engine
//! update. Nothing here is ever mutated by the core; prey consumption is
//! signaled back as a side effect instead.

use serde::{Deserialize, Serialize};

use crate::actor::AiState;
use crate::core::types::{ActorId, FieldEdge, PreySpecies, SchoolId, Species, Vec2};

/// What the lure is currently doing, as reported by the input/physics layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LureMotion {
    Idle,
    Dropping,
    Retrieving,
    Jigging,
}

/// Lure state owned by the external tackle/input collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LureState {
    pub position: Vec2,
    /// Depth in meters, already converted by the host's depth mapper
    pub depth: f32,
    /// Current speed in world units per second
    pub speed: f32,
    pub motion: LureMotion,
}

/// Another predator as visible to frenzy scanning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActorView {
    pub id: ActorId,
    pub species: Species,
    pub position: Vec2,
    pub state: AiState,
}

/// One fish in a prey school
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PreyMember {
    pub position: Vec2,
    pub visible: bool,
    pub consumed: bool,
}

/// A school of prey fish owned by the external flocking collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreySchool {
    pub id: SchoolId,
    pub species: PreySpecies,
    pub center: Vec2,
    pub members: Vec<PreyMember>,
}

impl PreySchool {
    /// A school counts as living while any member is visible and uneaten
    pub fn is_alive(&self) -> bool {
        self.members.iter().any(|m| m.visible && !m.consumed)
    }

    /// Index and position of the nearest targetable member
    pub fn nearest_member(&self, from: Vec2) -> Option<(usize, Vec2)> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.visible && !m.consumed)
            .map(|(i, m)| (i, m.position))
            .min_by(|a, b| {
                from.distance(&a.1)
                    .partial_cmp(&from.distance(&b.1))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Loose radius of the school around its center
    pub fn radius(&self) -> f32 {
        self.members
            .iter()
            .filter(|m| m.visible && !m.consumed)
            .map(|m| self.center.distance(&m.position))
            .fold(0.0f32, f32::max)
            .max(15.0)
    }

    /// True when a point sits inside the school's area
    pub fn contains(&self, point: Vec2) -> bool {
        self.is_alive() && self.center.distance(&point) <= self.radius()
    }
}

/// Playable field extents, used to pick migration edges
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl FieldBounds {
    /// The horizontal edge nearer to a position
    pub fn nearer_edge(&self, position: Vec2) -> FieldEdge {
        if position.x < self.width / 2.0 {
            FieldEdge::Left
        } else {
            FieldEdge::Right
        }
    }

    /// Target x coordinate of an edge
    pub fn edge_x(&self, edge: FieldEdge) -> f32 {
        match edge {
            FieldEdge::Left => 0.0,
            FieldEdge::Right => self.width,
        }
    }
}

/// Immutable per-tick view of the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// None when no lure is in the water
    pub lure: Option<LureState>,
    /// All other predators; the engine skips the actor's own entry by id
    pub actors: Vec<ActorView>,
    pub schools: Vec<PreySchool>,
    /// Simulated seconds since simulation start
    pub timestamp: f64,
    pub field: FieldBounds,
}

impl WorldSnapshot {
    pub fn school(&self, id: SchoolId) -> Option<&PreySchool> {
        self.schools.iter().find(|s| s.id == id)
    }

    /// True while any living school is visible anywhere on the field
    pub fn any_school_alive(&self) -> bool {
        self.schools.iter().any(|s| s.is_alive())
    }
}

/// Injected y-to-depth conversion owned by the host
///
/// The core never hardcodes a depth scale; tests inject trivial mappers.
pub trait DepthMapper {
    /// Depth in meters at a world-space y coordinate
    fn depth_at(&self, y: f32) -> f32;

    /// World-space y coordinate for a depth in meters
    fn y_for_depth(&self, depth: f32) -> f32;
}

/// Depth grows linearly with y (y = 0 is the surface)
#[derive(Debug, Clone, Copy)]
pub struct LinearDepthScale {
    pub meters_per_unit: f32,
}

impl Default for LinearDepthScale {
    fn default() -> Self {
        Self { meters_per_unit: 0.1 }
    }
}

impl DepthMapper for LinearDepthScale {
    fn depth_at(&self, y: f32) -> f32 {
        (y * self.meters_per_unit).max(0.0)
    }

    fn y_for_depth(&self, depth: f32) -> f32 {
        if self.meters_per_unit > 0.0 {
            depth / self.meters_per_unit
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school_with(members: Vec<PreyMember>) -> PreySchool {
        PreySchool {
            id: SchoolId::new(),
            species: PreySpecies::Minnow,
            center: Vec2::new(50.0, 50.0),
            members,
        }
    }

    #[test]
    fn test_consumed_school_is_dead() {
        let school = school_with(vec![
            PreyMember { position: Vec2::new(48.0, 50.0), visible: true, consumed: true },
            PreyMember { position: Vec2::new(52.0, 50.0), visible: false, consumed: false },
        ]);
        assert!(!school.is_alive());
        assert!(school.nearest_member(Vec2::ZERO).is_none());
    }

    #[test]
    fn test_nearest_member_skips_consumed() {
        let school = school_with(vec![
            PreyMember { position: Vec2::new(10.0, 0.0), visible: true, consumed: true },
            PreyMember { position: Vec2::new(40.0, 0.0), visible: true, consumed: false },
        ]);
        let (idx, pos) = school.nearest_member(Vec2::ZERO).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(pos, Vec2::new(40.0, 0.0));
    }

    #[test]
    fn test_nearer_edge() {
        let field = FieldBounds { width: 800.0, height: 400.0 };
        assert_eq!(field.nearer_edge(Vec2::new(100.0, 10.0)), FieldEdge::Left);
        assert_eq!(field.nearer_edge(Vec2::new(700.0, 10.0)), FieldEdge::Right);
        assert_eq!(field.edge_x(FieldEdge::Right), 800.0);
    }

    #[test]
    fn test_linear_depth_scale_round_trip() {
        let scale = LinearDepthScale { meters_per_unit: 0.05 };
        let depth = scale.depth_at(120.0);
        assert!((depth - 6.0).abs() < 0.001);
        assert!((scale.y_for_depth(depth) - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_depth_never_negative() {
        let scale = LinearDepthScale::default();
        assert_eq!(scale.depth_at(-50.0), 0.0);
    }
}
