//! Infinite plane primitive
//!
//! Stored in Hessian normal form: a unit normal plus `d = -dot(normal, origin)`,
//! so the signed distance of a point is a single dot product.

use crate::foundation::math::{utils, Vec3};
use super::GeometryError;

/// Cross products or normals shorter than this cannot be normalized reliably
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// An oriented infinite plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Vec3,
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Creates a plane through `origin` with the given (not necessarily unit) normal
    pub fn from_origin_normal(origin: Vec3, normal: Vec3) -> Result<Self, GeometryError> {
        if !utils::is_finite(&origin) || !utils::is_finite(&normal) {
            return Err(GeometryError::NonFinite);
        }

        let normal = normal
            .try_normalize(DEGENERATE_EPSILON)
            .ok_or(GeometryError::Degenerate("zero-length plane normal"))?;

        Ok(Self::from_unit_normal(origin, normal))
    }

    /// Creates the plane through three points.
    ///
    /// The normal follows the right-hand rule over `p1 -> p2 -> p3`, and `p1`
    /// becomes the plane origin. Collinear or coincident points are rejected.
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Result<Self, GeometryError> {
        if ![p1, p2, p3].iter().all(utils::is_finite) {
            return Err(GeometryError::NonFinite);
        }

        let normal = (p2 - p1)
            .cross(&(p3 - p1))
            .try_normalize(DEGENERATE_EPSILON)
            .ok_or(GeometryError::Degenerate("plane points are collinear or coincident"))?;

        Ok(Self::from_unit_normal(p1, normal))
    }

    /// Hot-path constructor for normals that are already unit length
    pub(crate) fn from_unit_normal(origin: Vec3, normal: Vec3) -> Self {
        debug_assert!((normal.norm() - 1.0).abs() < 1e-3, "plane normal must be unit length");
        Self {
            origin,
            normal,
            d: -normal.dot(&origin),
        }
    }

    /// The point the plane was built through
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit normal
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Constant term of the plane equation
    pub fn d(&self) -> f32 {
        self.d
    }

    /// Signed distance from the plane, positive on the side the normal points to
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        point.dot(&self.normal) + self.d
    }

    /// True when `direction` does not point away from the normal.
    ///
    /// Motion parallel to the plane (zero dot product) counts as front-facing.
    pub fn is_front_facing_to(&self, direction: &Vec3) -> bool {
        self.normal.dot(direction) <= 0.0
    }
}
