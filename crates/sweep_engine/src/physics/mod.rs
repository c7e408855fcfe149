//! Physics module for collision detection and response
//!
//! Provides continuous swept-sphere collision against static wall quads and
//! the sliding response that keeps the player on the surface of the scene.

pub mod collision;
pub mod response;

#[cfg(test)]
mod tests;

pub use collision::{
    Collision,
    CollisionSolver,
    ContactKind,
    GeometryError,
    Plane,
    Wall,
};
pub use response::{project_velocity, MotionResolver, Resolution, ResolveError};
