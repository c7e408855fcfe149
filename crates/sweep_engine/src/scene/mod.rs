//! Scene management
//!
//! A [`World`] owns the static walls and the player and is the single entry
//! point that advances the simulation.
//!
//! ## Architecture
//!
//! ```text
//! SimulationConfig (file or code)
//!      ↓
//! World::from_config  (validates, builds walls)
//!      ↓
//! World::tick  →  Player::tick  →  MotionResolver  →  CollisionSolver (per wall)
//! ```

mod world;

pub use world::World;

use crate::config::ConfigError;
use crate::physics::collision::GeometryError;

/// Errors raised while building a scene
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// A wall in the configuration has degenerate or non-finite corners
    #[error("Wall {index} is invalid: {source}")]
    Geometry {
        /// Position of the wall in the configuration
        index: usize,
        /// What is wrong with it
        source: GeometryError,
    },

    /// The configuration failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while advancing the simulation
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    /// Tick length was zero, negative, NaN or infinite
    #[error("Delta time must be positive and finite, got {0}")]
    InvalidDeltaTime(f32),
}
