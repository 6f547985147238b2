//! Geometry primitives for the beam tracer
//!
//! Pure functions: ray/segment intersection via the parametric determinant
//! method, the law of reflection in angle form, and the ray/circle
//! closest-approach test behind target contact. Degenerate inputs
//! (near-parallel lines, hits behind the origin) are defined misses, never
//! errors.

use glam::Vec2;

use crate::angle_to_dir;
use std::f32::consts::FRAC_PI_2;

/// A circle in play-area coordinates (the charge target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A forward intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    /// Distance from the ray origin to the hit point.
    pub dist: f32,
}

/// Intersect a ray with the segment `a`-`b`.
///
/// The ray is treated as a segment of length `extension` (which must exceed
/// the play-area diagonal) and solved against `a`-`b` with the standard
/// parametric determinant method. Near-parallel pairs (|det| below
/// `parallel_epsilon`) report no hit, as do hits within `forward_epsilon` of
/// the origin, which rejects a reflected ray re-hitting the surface it just
/// left.
pub fn segment_hit(
    origin: Vec2,
    angle: f32,
    a: Vec2,
    b: Vec2,
    extension: f32,
    forward_epsilon: f32,
    parallel_epsilon: f32,
) -> Option<RayHit> {
    let d = angle_to_dir(angle) * extension;
    let e = b - a;

    let det = d.perp_dot(e);
    if det.abs() < parallel_epsilon {
        return None;
    }

    let ao = a - origin;
    let t = ao.perp_dot(e) / det;
    let u = ao.perp_dot(d) / det;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    let dist = t * extension;
    if dist <= forward_epsilon {
        return None;
    }

    Some(RayHit {
        point: origin + d * t,
        dist,
    })
}

/// Law of reflection in angle form.
///
/// The mirror's surface normal sits at `mirror_angle` + pi/2; the outgoing
/// direction is the incident direction mirrored across that normal:
/// 2 * normal - incident. Angles accumulate unbounded; callers only feed
/// them through cos/sin.
#[inline]
pub fn reflect_angle(incident: f32, mirror_angle: f32) -> f32 {
    let normal = mirror_angle + FRAC_PI_2;
    2.0 * normal - incident
}

/// First approach of a ray to a circle, within `tolerance` of its edge.
///
/// Projects the circle center onto the ray: contact needs the projection to
/// land at a forward, bounded distance and the perpendicular miss distance
/// to be within radius + tolerance. Returns the along-ray distance of
/// closest approach.
pub fn circle_approach(
    origin: Vec2,
    angle: f32,
    circle: Circle,
    tolerance: f32,
    max_dist: f32,
) -> Option<f32> {
    let dir = angle_to_dir(angle);
    let along = (circle.center - origin).dot(dir);
    if along <= 0.0 || along > max_dist {
        return None;
    }
    let closest = origin + dir * along;
    let miss = (circle.center - closest).length();
    (miss <= circle.radius + tolerance).then_some(along)
}
