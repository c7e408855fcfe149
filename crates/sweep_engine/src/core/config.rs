//! # Simulation Configuration
//!
//! All tunables for the player, the collision resolver and the scene in one
//! place. Every struct is serde-serializable, so a complete simulation can be
//! described in a TOML or RON file and loaded through [`Config`].
//!
//! ## Configuration Categories
//!
//! - **Player Config**: Start position, speed, gravity, collision radius
//! - **Resolver Config**: Sliding tolerance and iteration cap
//! - **Scene Config**: The static walls
//!
//! Vectors are stored as plain `[x, y, z]` arrays so the files stay readable.

use serde::{Serialize, Deserialize};

use crate::physics::response::{DEFAULT_MAX_ITERATIONS, DEFAULT_VELOCITY_TOLERANCE};
use crate::physics::collision::wall::DEFAULT_WALL_COLOR;

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError, ConfigFormat};

fn ensure_finite(name: &str, values: &[f32]) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite")))
    }
}

/// # Player Configuration
///
/// Movement and collision parameters for the first-person player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Where the sphere centre starts
    pub start_position: [f32; 3],
    /// Speed of the normalized input velocity, in units per second
    pub max_speed: f32,
    /// Fall velocity applied every tick, in units per second
    pub gravity: [f32; 3],
    /// Radius of the collision sphere
    pub radius: f32,
}

impl PlayerConfig {
    /// Create a player configuration with default parameters
    pub fn new() -> Self {
        Self {
            start_position: [0.0, 1.0, 0.0],
            max_speed: 8.0,
            gravity: [0.0, -3.0, 0.0],
            radius: 1.0,
        }
    }

    /// Set start position
    pub fn with_start_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.start_position = [x, y, z];
        self
    }

    /// Set movement speed
    pub fn with_max_speed(mut self, speed: f32) -> Self {
        self.max_speed = speed;
        self
    }

    /// Set gravity
    pub fn with_gravity(mut self, x: f32, y: f32, z: f32) -> Self {
        self.gravity = [x, y, z];
        self
    }

    /// Set collision radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("player.start_position", &self.start_position)?;
        ensure_finite("player.gravity", &self.gravity)?;

        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player.max_speed must be a non-negative number, got {}",
                self.max_speed
            )));
        }

        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player.radius must be positive, got {}",
                self.radius
            )));
        }

        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Resolver Configuration
///
/// Controls when iterative sliding stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Velocities shorter than this count as stopped
    pub velocity_tolerance: f32,
    /// Passes allowed before the tick's movement is discarded
    pub max_iterations: u32,
}

impl ResolverConfig {
    /// Create a resolver configuration with default parameters
    pub fn new() -> Self {
        Self {
            velocity_tolerance: DEFAULT_VELOCITY_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set velocity tolerance
    pub fn with_velocity_tolerance(mut self, tolerance: f32) -> Self {
        self.velocity_tolerance = tolerance;
        self
    }

    /// Set iteration cap
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.velocity_tolerance.is_finite() || self.velocity_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "resolver.velocity_tolerance must be positive, got {}",
                self.velocity_tolerance
            )));
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid("resolver.max_iterations must be at least 1".to_string()));
        }

        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One wall quad, given by three consecutive corners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    /// First corner
    pub p1: [f32; 3],
    /// Second corner
    pub p2: [f32; 3],
    /// Third corner; the fourth is derived
    pub p3: [f32; 3],
    /// Render color, ignored by collision
    #[serde(default = "default_wall_color")]
    pub color: [f32; 3],
}

fn default_wall_color() -> [f32; 3] {
    DEFAULT_WALL_COLOR
}

impl WallConfig {
    /// Create a wall from three corners with the default color
    pub fn new(p1: [f32; 3], p2: [f32; 3], p3: [f32; 3]) -> Self {
        Self {
            p1,
            p2,
            p3,
            color: DEFAULT_WALL_COLOR,
        }
    }

    /// Set color
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = [r, g, b];
        self
    }
}

/// # Scene Configuration
///
/// The static walls. Geometry is checked when the scene is built, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Walls in insertion order
    pub walls: Vec<WallConfig>,
}

impl SceneConfig {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wall
    pub fn with_wall(mut self, wall: WallConfig) -> Self {
        self.walls.push(wall);
        self
    }

    /// A floor with a straight corridor running along -z.
    ///
    /// The corridor is 6 units wide, 4 tall and 30 long, closed at the far
    /// end. The player starts at the default start position facing into it.
    pub fn corridor() -> Self {
        Self::new()
            // Floor
            .with_wall(WallConfig::new([-3.0, 0.0, 5.0], [3.0, 0.0, 5.0], [3.0, 0.0, -25.0]).with_color(0.4, 0.4, 0.4))
            // Left wall, facing +x
            .with_wall(WallConfig::new([-3.0, 0.0, 5.0], [-3.0, 0.0, -25.0], [-3.0, 4.0, -25.0]))
            // Right wall, facing -x
            .with_wall(WallConfig::new([3.0, 0.0, -25.0], [3.0, 0.0, 5.0], [3.0, 4.0, 5.0]))
            // End wall, facing +z
            .with_wall(WallConfig::new([-3.0, 0.0, -25.0], [3.0, 0.0, -25.0], [3.0, 4.0, -25.0]).with_color(0.8, 0.2, 0.1))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, wall) in self.walls.iter().enumerate() {
            let name = format!("scene.walls[{index}]");
            ensure_finite(&name, &wall.p1)?;
            ensure_finite(&name, &wall.p2)?;
            ensure_finite(&name, &wall.p3)?;
        }
        Ok(())
    }
}

/// # Complete Simulation Configuration
///
/// Top-level configuration. This is what applications load from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Player parameters
    pub player: PlayerConfig,
    /// Sliding parameters
    pub resolver: ResolverConfig,
    /// Static walls
    pub scene: SceneConfig,
}

impl SimulationConfig {
    /// Create a configuration with default player and resolver and an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Set player configuration
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    /// Set resolver configuration
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set scene configuration
    pub fn with_scene(mut self, scene: SceneConfig) -> Self {
        self.scene = scene;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        self.resolver.validate()?;
        self.scene.validate()?;
        Ok(())
    }
}

impl Config for SimulationConfig {}
