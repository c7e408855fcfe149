//! # Sweep Engine
//!
//! Continuous collision detection and sliding response for a first-person
//! sphere walking among static planar walls.
//!
//! ## Features
//!
//! - **Swept-Sphere Collision**: Face, vertex and edge contacts against finite quads
//! - **Sliding Response**: Iterative velocity projection with a hard iteration cap
//! - **Player Controller**: Camera-relative input, separate move and fall sweeps
//! - **Configurable**: Player, resolver and scene loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sweep_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SimulationConfig::new().with_scene(SceneConfig::corridor());
//!     let mut world: World = World::from_config(&config)?;
//!
//!     world.player_mut().move_player(Movement::Forward, 1.0 / 60.0);
//!     let position = world.tick(1.0 / 60.0)?;
//!     println!("player at {position:?}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod physics;
pub mod player;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, ConfigFormat, PlayerConfig, ResolverConfig, SceneConfig, SimulationConfig, WallConfig},
        foundation::math::Vec3,
        physics::{Collision, CollisionSolver, ContactKind, GeometryError, MotionResolver, Plane, Wall},
        player::{FirstPersonCamera, Movement, Player, PlayerCamera},
        scene::{SceneError, SimulationError, World},
    };
}
