//! Distance and angle helpers with degenerate-input safety
//!
//! Every function here must return a finite value for any pair of inputs,
//! including coincident points. Movement math routes through `toward` so a
//! zero-distance target can never produce NaN.

use crate::core::types::Vec2;

/// Below this separation two points are treated as coincident
pub const COINCIDENT_EPSILON: f32 = 0.0001;

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(&b)
}

/// Angle in radians from `a` to `b`, 0.0 when the points coincide
pub fn angle_to(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    if d.length() < COINCIDENT_EPSILON {
        return 0.0;
    }
    d.y.atan2(d.x)
}

/// Unit vector from `a` toward `b`, zero vector when the points coincide
pub fn direction_to(a: Vec2, b: Vec2) -> Vec2 {
    (b - a).normalize()
}

/// Movement vector of magnitude `speed` from `from` toward `to`
///
/// Returns the zero vector at zero separation rather than NaN.
pub fn toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    direction_to(from, to) * speed
}

/// Point on a circle of `radius` around `center` at `angle` radians
pub fn orbit_point(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Clamp a value into [0, 1]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
