//! Collision response by iterative velocity projection
//!
//! The resolver never moves the sphere. It takes the displacement the player
//! wants for this tick and repeatedly removes the component that would push
//! into whatever the sweep hits, until the remaining displacement is clear of
//! every wall. The result is the "slide" along walls and floors.

use crate::foundation::math::Vec3;
use super::collision::{CollisionSolver, Plane, Wall};

/// Displacements shorter than this are treated as "stopped"
pub const DEFAULT_VELOCITY_TOLERANCE: f32 = 1e-4;

/// Passes allowed before a resolution is abandoned
pub const DEFAULT_MAX_ITERATIONS: u32 = 32;

/// A clip that changes the velocity by less than this (squared) is not a contact
const CLIP_CHANGE_EPSILON_SQ: f32 = 1e-12;

/// Failure to find a collision-free displacement
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ResolveError {
    /// The velocity kept being clipped for every allowed pass
    #[error("Velocity resolution did not converge after {iterations} passes (|v| = {remaining})")]
    NonConverging {
        /// Passes performed before giving up
        iterations: u32,
        /// Length of the velocity when the cap was hit
        remaining: f32,
    },
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Collision-free displacement
    pub velocity: Vec3,
    /// Passes over the wall list
    pub passes: u32,
    /// Contacts that clipped the velocity
    pub contacts: u32,
}

/// Remove the component of `velocity` that points along `normal`.
///
/// Clips the destination `origin + velocity` onto the plane through `origin`
/// with the given unit normal and returns the displacement to it.
pub fn project_velocity(origin: &Vec3, velocity: &Vec3, normal: &Vec3) -> Vec3 {
    let plane = Plane::from_unit_normal(*origin, *normal);
    let destination = origin + velocity;
    let distance = plane.signed_distance(&destination);

    (destination - normal * distance) - origin
}

/// Runs the swept-sphere solver over a wall list and slides the velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionResolver {
    solver: CollisionSolver,
    velocity_tolerance: f32,
    max_iterations: u32,
}

impl Default for MotionResolver {
    fn default() -> Self {
        Self::new(CollisionSolver::default())
    }
}

impl MotionResolver {
    /// Resolver with default tolerance and iteration cap
    pub fn new(solver: CollisionSolver) -> Self {
        Self {
            solver,
            velocity_tolerance: DEFAULT_VELOCITY_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set the length below which a velocity counts as stopped
    pub fn with_velocity_tolerance(mut self, tolerance: f32) -> Self {
        self.velocity_tolerance = tolerance;
        self
    }

    /// Set the pass limit
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The underlying sweep test
    pub fn solver(&self) -> &CollisionSolver {
        &self.solver
    }

    /// Velocity tolerance
    pub fn velocity_tolerance(&self) -> f32 {
        self.velocity_tolerance
    }

    /// Pass limit
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Slide `velocity` from `origin` until it no longer hits any wall.
    ///
    /// Each pass tests every wall against the current velocity and clips it
    /// against every contact found. Resolution stops after a pass without
    /// contacts or once the velocity is shorter than the tolerance.
    pub fn resolve(&self, origin: &Vec3, velocity: &Vec3, walls: &[Wall]) -> Result<Resolution, ResolveError> {
        let mut velocity = *velocity;
        let mut passes = 0;
        let mut contacts = 0;

        while velocity.norm() >= self.velocity_tolerance {
            if passes >= self.max_iterations {
                return Err(ResolveError::NonConverging {
                    iterations: passes,
                    remaining: velocity.norm(),
                });
            }
            passes += 1;

            let mut pass_contacts = 0;
            for wall in walls {
                let Some(collision) = self.solver.collides(wall, origin, &velocity) else {
                    continue;
                };

                let clipped = project_velocity(origin, &velocity, &collision.plane.normal());
                if (clipped - velocity).norm_squared() > CLIP_CHANGE_EPSILON_SQ {
                    velocity = clipped;
                    pass_contacts += 1;
                }
            }

            log::debug!(
                "resolve pass {}: {} contact(s), |v| = {:.5}",
                passes,
                pass_contacts,
                velocity.norm()
            );

            if pass_contacts == 0 {
                break;
            }
            contacts += pass_contacts;
        }

        Ok(Resolution { velocity, passes, contacts })
    }

    /// Collision-free displacement for this tick.
    ///
    /// A resolution that does not converge stops the player for the tick
    /// and logs a warning.
    pub fn collide_with_world(&self, origin: &Vec3, velocity: &Vec3, walls: &[Wall]) -> Vec3 {
        match self.resolve(origin, velocity, walls) {
            Ok(resolution) => resolution.velocity,
            Err(err) => {
                log::warn!("{err}; discarding movement at {origin:?}");
                Vec3::zeros()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// 20x20 floor at y = 0 facing +y
    fn floor() -> Wall {
        Wall::new(
            Vec3::new(-10.0, 0.0, -10.0),
            Vec3::new(-10.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 10.0),
        )
        .unwrap()
    }

    #[test]
    fn test_projection_removes_normal_component() {
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let clipped = project_velocity(&Vec3::new(3.0, 1.0, -2.0), &Vec3::new(2.0, -5.0, 1.0), &normal);

        assert_abs_diff_eq!(clipped.dot(&normal), 0.0, epsilon = 1e-5);
        assert_relative_eq!(clipped, Vec3::new(2.0, 0.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_projection_on_slanted_plane() {
        let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
        let velocity = Vec3::new(-2.0, 0.0, 3.0);
        let clipped = project_velocity(&Vec3::new(-4.0, 7.0, 0.5), &velocity, &normal);

        assert_abs_diff_eq!(clipped.dot(&normal), 0.0, epsilon = 1e-5);
        // The tangential part survives untouched
        let tangential = velocity - normal * velocity.dot(&normal);
        assert_relative_eq!(clipped, tangential, epsilon = 1e-5);
    }

    #[test]
    fn test_clear_path_is_untouched() {
        let resolver = MotionResolver::default();
        let velocity = Vec3::new(1.0, 0.0, 2.0);
        let resolution = resolver.resolve(&Vec3::new(0.0, 3.0, 0.0), &velocity, &[floor()]).unwrap();

        assert_eq!(resolution.velocity, velocity);
        assert_eq!(resolution.passes, 1);
        assert_eq!(resolution.contacts, 0);
    }

    #[test]
    fn test_slides_along_floor() {
        let resolver = MotionResolver::default();
        let resolution = resolver
            .resolve(&Vec3::new(0.0, 1.5, 0.0), &Vec3::new(1.0, -1.0, 0.0), &[floor()])
            .unwrap();

        assert_relative_eq!(resolution.velocity, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-5);
        assert_eq!(resolution.passes, 2);
        assert_eq!(resolution.contacts, 1);
    }

    #[test]
    fn test_resting_on_floor_stops_fall() {
        let resolver = MotionResolver::default();
        let velocity = resolver.collide_with_world(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(0.0, -0.05, 0.0), &[floor()]);
        assert_abs_diff_eq!(velocity.norm(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = MotionResolver::default();
        let origin = Vec3::new(0.0, 1.5, 0.0);
        let walls = [floor()];

        let once = resolver.collide_with_world(&origin, &Vec3::new(1.0, -1.0, 0.5), &walls);
        let twice = resolver.collide_with_world(&origin, &once, &walls);
        assert_relative_eq!(once, twice, epsilon = 1e-6);
    }

    #[test]
    fn test_tiny_velocity_skips_work() {
        let resolver = MotionResolver::default();
        let resolution = resolver
            .resolve(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(0.0, -1e-5, 0.0), &[floor()])
            .unwrap();
        assert_eq!(resolution.passes, 0);
    }

    #[test]
    fn test_iteration_cap_reports_non_converging() {
        let resolver = MotionResolver::default().with_max_iterations(1);
        let origin = Vec3::new(0.0, 1.5, 0.0);
        let velocity = Vec3::new(1.0, -1.0, 0.0);

        let result = resolver.resolve(&origin, &velocity, &[floor()]);
        assert!(matches!(result, Err(ResolveError::NonConverging { iterations: 1, .. })));

        // The world-facing entry point turns the failure into "no movement"
        assert_eq!(resolver.collide_with_world(&origin, &velocity, &[floor()]), Vec3::zeros());
    }
}
