//! Swept-sphere collision detection against static wall quads
//!
//! The player is modelled as a sphere whose centre sweeps along a straight
//! segment every tick. Each wall is tested continuously over that segment, so
//! fast movement cannot tunnel through thin geometry.
//!
//! # Module Organization
//!
//! - [`plane`] - Infinite plane primitive (signed distance, facing test)
//! - [`wall`] - Finite quadrilateral collider built on a plane
//! - [`solver`] - Face / vertex / edge sweep tests and the quadratic root helper
//!
//! # Key Types
//!
//! - [`Plane`], [`Wall`] - Immutable collision geometry, built once per scene
//! - [`CollisionSolver`] - Stateless per-wall sweep query
//! - [`Collision`] - Earliest contact found by a query
//!
//! Geometry is validated when it is constructed. Queries on valid geometry are
//! total: they only ever answer "contact" or "no contact".

pub mod plane;
pub mod wall;
pub mod solver;

// Re-export commonly used types
pub use plane::Plane;
pub use wall::Wall;
pub use solver::{lowest_root, Collision, CollisionSolver, ContactKind};

/// Errors raised while building collision geometry
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The input does not span a plane (collinear points, zero normal)
    #[error("Degenerate geometry: {0}")]
    Degenerate(&'static str),

    /// A coordinate was NaN or infinite
    #[error("Geometry contains a non-finite coordinate")]
    NonFinite,
}
