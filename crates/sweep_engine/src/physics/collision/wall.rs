//! Finite quadrilateral wall collider
//!
//! A wall is a parallelogram defined by three corners; the fourth is derived
//! as `p4 = p3 - (p2 - p1)`. Corners are stored in winding order so that
//! consecutive points form the boundary edges.

use crate::foundation::math::Vec3;
use super::plane::Plane;
use super::GeometryError;

/// Cosmetic color given to walls that do not specify one
pub const DEFAULT_WALL_COLOR: [f32; 3] = [0.0, 0.9, 0.2];

/// A static, finite, planar quad that the player collides with
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    plane: Plane,
    points: [Vec3; 4],
    color: [f32; 3],
}

impl Wall {
    /// Builds a wall from three consecutive corners.
    ///
    /// Fails when the corners do not span a plane.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3) -> Result<Self, GeometryError> {
        let plane = Plane::from_points(p1, p2, p3)?;
        let p4 = p3 - (p2 - p1);

        Ok(Self {
            plane,
            points: [p1, p2, p3, p4],
            color: DEFAULT_WALL_COLOR,
        })
    }

    /// Builder-style color override
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.set_color(r, g, b);
        self
    }

    /// The plane the wall lies in
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Corners in winding order `p1, p2, p3, p4`
    pub fn points(&self) -> &[Vec3; 4] {
        &self.points
    }

    /// Boundary edges `(p_i, p_{i+1 mod 4})` in winding order
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        (0..4).map(move |i| (self.points[i], self.points[(i + 1) % 4]))
    }

    /// Render color. Never read by collision.
    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    /// Change the render color
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.color = [r, g, b];
    }

    /// True when `point`, projected along the wall normal, falls inside the quad.
    ///
    /// The quad is split into triangles `(p1, p2, p4)` and `(p2, p3, p4)`.
    /// Points exactly on a boundary edge are outside, so grazing contacts fall
    /// through to the edge test. The shared diagonal `p2-p4` is interior and
    /// counts as inside.
    pub fn point_inside(&self, point: &Vec3) -> bool {
        let normal = self.plane.normal();
        let [p1, p2, p3, p4] = self.points;

        point_in_triangle(point, &normal, [(p1, p2, true), (p2, p4, false), (p4, p1, true)])
            || point_in_triangle(point, &normal, [(p2, p3, true), (p3, p4, true), (p4, p2, false)])
    }
}

/// Same-side test over three directed edges `(start, end, strict)`.
///
/// `strict` edges exclude points lying exactly on them.
fn point_in_triangle(point: &Vec3, normal: &Vec3, edges: [(Vec3, Vec3, bool); 3]) -> bool {
    edges.iter().all(|(start, end, strict)| {
        let side = normal.dot(&(end - start).cross(&(point - start)));
        if *strict {
            side > 0.0
        } else {
            side >= 0.0
        }
    })
}
