//! Swept sphere vs. wall quad
//!
//! Follows the swept-ellipsoid formulation from Fauerby, "Improved Collision
//! detection and Response" (2003), specialised to a sphere. A query looks for
//! the earliest time `t` in `[0, 1]` at which a sphere moving from `origin` to
//! `origin + velocity` touches the wall:
//!
//! 1. **Face** - the sphere reaches the plane at a point inside the quad.
//!    When this happens it is always the first contact, so it is returned
//!    immediately.
//! 2. **Vertex** - the sphere surface reaches one of the four corners.
//! 3. **Edge** - the sphere surface reaches the interior of a boundary edge.
//!
//! Vertex and edge tests shrink the search window as they go, so the lowest
//! `t` always wins.

use crate::foundation::math::Vec3;
use super::plane::Plane;
use super::wall::Wall;

/// Radius of the swept sphere when none is configured
pub const UNIT_RADIUS: f32 = 1.0;

/// Quadratic leading coefficients below this are treated as zero
const SINGULAR_EPSILON: f32 = 1e-12;

/// Edges shorter than this (squared) are skipped
const MIN_EDGE_LENGTH_SQ: f32 = 1e-12;

/// Which feature of the wall was touched first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// The flat interior of the quad
    Face,
    /// One of the four corners
    Vertex,
    /// A boundary edge between two corners
    Edge,
}

/// Earliest contact between the swept sphere and one wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Fraction of the velocity travelled before contact, in `[0, 1]`
    pub t: f32,
    /// Contact point on the wall
    pub point: Vec3,
    /// Plane to slide along. For face contacts this is the wall plane; for
    /// vertex and edge contacts it passes through the contact point, facing
    /// the sphere centre.
    pub plane: Plane,
    /// Wall feature that was hit
    pub kind: ContactKind,
}

/// Outcome of the face stage
enum FaceSweep {
    /// The sphere never enters the wall's slab during this sweep
    Miss,
    /// Genuine face contact
    Hit(Collision),
    /// In the slab but not over the face; corners and edges decide
    Fallback,
}

/// Sweep test for a sphere of fixed radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionSolver {
    radius: f32,
}

impl Default for CollisionSolver {
    fn default() -> Self {
        Self::new(UNIT_RADIUS)
    }
}

impl CollisionSolver {
    /// Creates a solver for spheres of the given radius.
    ///
    /// The radius must be positive and finite; configs are validated before
    /// they reach this point.
    pub fn new(radius: f32) -> Self {
        debug_assert!(radius.is_finite() && radius > 0.0, "sphere radius must be positive");
        Self { radius }
    }

    /// Sphere radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Find the earliest contact of the sphere sweeping from `origin` by
    /// `velocity` against `wall`, or `None` if the sweep is clear.
    pub fn collides(&self, wall: &Wall, origin: &Vec3, velocity: &Vec3) -> Option<Collision> {
        match self.sweep_face(wall, origin, velocity) {
            FaceSweep::Miss => None,
            FaceSweep::Hit(collision) => Some(collision),
            FaceSweep::Fallback => self.sweep_features(wall, origin, velocity),
        }
    }

    fn sweep_face(&self, wall: &Wall, origin: &Vec3, velocity: &Vec3) -> FaceSweep {
        let plane = wall.plane();
        let signed_dist = plane.signed_distance(origin);
        let norm_dot_vel = plane.normal().dot(velocity);

        if norm_dot_vel == 0.0 {
            // Moving parallel to the plane: either always clear or always inside the slab
            if signed_dist.abs() >= self.radius {
                return FaceSweep::Miss;
            }
            return FaceSweep::Fallback;
        }

        let mut t0 = (-self.radius - signed_dist) / norm_dot_vel;
        let mut t1 = (self.radius - signed_dist) / norm_dot_vel;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > 1.0 || t1 < 0.0 {
            return FaceSweep::Miss;
        }

        let t0 = t0.clamp(0.0, 1.0);

        let side = if signed_dist >= 0.0 { 1.0 } else { -1.0 };

        // Leaving the plane on the side the sphere is already on. Flipping the
        // velocity by `side` makes the front-facing test hold behind the plane too.
        if signed_dist != 0.0 && !plane.is_front_facing_to(&(velocity * side)) {
            return FaceSweep::Fallback;
        }

        // The sphere touches the plane with the point nearest to it
        let point = origin - plane.normal() * (side * self.radius) + velocity * t0;

        if wall.point_inside(&point) {
            log::trace!("face contact at t = {t0:.4}, point = {point:?}");
            FaceSweep::Hit(Collision {
                t: t0,
                point,
                plane: *plane,
                kind: ContactKind::Face,
            })
        } else {
            FaceSweep::Fallback
        }
    }

    fn sweep_features(&self, wall: &Wall, origin: &Vec3, velocity: &Vec3) -> Option<Collision> {
        let radius_sq = self.radius * self.radius;
        let vel_sq = velocity.norm_squared();
        let mut best_t = 1.0;
        let mut best = None;

        for vertex in wall.points() {
            let to_origin = origin - vertex;
            let a = vel_sq;
            let b = 2.0 * velocity.dot(&to_origin);
            let c = to_origin.norm_squared() - radius_sq;

            if let Some(t) = lowest_root(a, b, c, best_t) {
                best_t = t;
                best = Some(self.feature_contact(wall, origin, velocity, t, *vertex, ContactKind::Vertex));
            }
        }

        for (start, end) in wall.edges() {
            let edge = end - start;
            let edge_sq = edge.norm_squared();
            if edge_sq < MIN_EDGE_LENGTH_SQ {
                continue;
            }

            let base_to_vertex = start - origin;
            let edge_dot_vel = edge.dot(velocity);
            let edge_dot_btv = edge.dot(&base_to_vertex);

            let a = edge_sq * -vel_sq + edge_dot_vel * edge_dot_vel;
            let b = edge_sq * (2.0 * velocity.dot(&base_to_vertex)) - 2.0 * edge_dot_vel * edge_dot_btv;
            let c = edge_sq * (radius_sq - base_to_vertex.norm_squared()) + edge_dot_btv * edge_dot_btv;

            if let Some(t) = lowest_root(a, b, c, best_t) {
                // Where along the edge the contact lands
                let f = (edge_dot_vel * t - edge_dot_btv) / edge_sq;
                if (0.0..=1.0).contains(&f) {
                    best_t = t;
                    let point = start + edge * f;
                    best = Some(self.feature_contact(wall, origin, velocity, t, point, ContactKind::Edge));
                }
            }
        }

        if let Some(collision) = &best {
            log::trace!(
                "{:?} contact at t = {:.4}, point = {:?}",
                collision.kind,
                collision.t,
                collision.point
            );
        }
        best
    }

    /// Sliding plane for a corner or edge hit: through the contact point,
    /// facing the sphere centre at the moment of contact.
    fn feature_contact(
        &self,
        wall: &Wall,
        origin: &Vec3,
        velocity: &Vec3,
        t: f32,
        point: Vec3,
        kind: ContactKind,
    ) -> Collision {
        let centre = origin + velocity * t;
        let normal = (centre - point)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(|| wall.plane().normal());

        Collision {
            t,
            point,
            plane: Plane::from_unit_normal(point, normal),
            kind,
        }
    }
}

/// Smallest root of `a*t^2 + b*t + c = 0` in the open interval `(0, max_t)`.
///
/// Falls back to the larger root when only it is in range. Returns `None` when
/// there is no real root, when neither root is in range, or when `a` is zero
/// (the quadratic degenerates and the sweep has no motion along that axis).
pub fn lowest_root(a: f32, b: f32, c: f32, max_t: f32) -> Option<f32> {
    if a.abs() < SINGULAR_EPSILON {
        return None;
    }

    let determinant = b * b - 4.0 * a * c;
    if determinant < 0.0 {
        return None;
    }

    let sqrt_d = determinant.sqrt();
    let mut r1 = (-b - sqrt_d) / (2.0 * a);
    let mut r2 = (-b + sqrt_d) / (2.0 * a);
    if r1 > r2 {
        std::mem::swap(&mut r1, &mut r2);
    }

    if r1 > 0.0 && r1 < max_t {
        Some(r1)
    } else if r2 > 0.0 && r2 < max_t {
        Some(r2)
    } else {
        None
    }
}
