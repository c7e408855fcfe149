//! Player controller
//!
//! Input calls between ticks only accumulate directions. `tick` turns the
//! accumulated direction into a displacement of `max_speed * delta_time`,
//! slides it against the walls, then applies gravity as a second,
//! independent sweep from where the first one ended.

use crate::core::config::{ConfigError, PlayerConfig, ResolverConfig};
use crate::foundation::math::{utils, vec3_from_array, Vec3};
use crate::physics::collision::{CollisionSolver, Wall};
use crate::physics::response::MotionResolver;
use crate::scene::SimulationError;
use super::{FirstPersonCamera, Movement, PlayerCamera};

/// A first-person sphere that walks, jumps and falls among walls
#[derive(Debug, Clone)]
pub struct Player<C: PlayerCamera = FirstPersonCamera> {
    position: Vec3,
    velocity: Vec3,
    max_speed: f32,
    gravity: Vec3,
    resolver: MotionResolver,
    camera: C,
}

impl<C: PlayerCamera> Player<C> {
    /// Create a player from configuration.
    ///
    /// Both configs are validated first, so a zero radius or a non-finite
    /// gravity is reported instead of reaching the solver.
    pub fn from_config(player: &PlayerConfig, resolver: &ResolverConfig, mut camera: C) -> Result<Self, ConfigError> {
        player.validate()?;
        resolver.validate()?;

        let position = vec3_from_array(player.start_position);
        camera.set_position(position);

        Ok(Self {
            position,
            velocity: Vec3::zeros(),
            max_speed: player.max_speed,
            gravity: vec3_from_array(player.gravity),
            resolver: MotionResolver::new(CollisionSolver::new(player.radius))
                .with_velocity_tolerance(resolver.velocity_tolerance)
                .with_max_iterations(resolver.max_iterations),
            camera,
        })
    }

    /// Centre of the player sphere
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Input accumulated since the last tick
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Movement speed in units per second
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Fall velocity in units per second
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Collision sphere radius
    pub fn radius(&self) -> f32 {
        self.resolver.solver().radius()
    }

    /// Collision resolver used by `tick`
    pub fn resolver(&self) -> &MotionResolver {
        &self.resolver
    }

    /// The camera collaborator
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable camera access, for mouse look
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Accumulate one horizontal input direction.
    ///
    /// The camera basis vector is flattened onto the ground plane and
    /// normalized, so looking up or down does not slow the player. Speed is
    /// applied once per tick, so `_delta_time` is unused.
    pub fn move_player(&mut self, direction: Movement, _delta_time: f32) {
        let basis = match direction {
            Movement::Forward => self.camera.front(),
            Movement::Backward => -self.camera.front(),
            Movement::Left => -self.camera.right(),
            Movement::Right => self.camera.right(),
        };

        match utils::flatten_horizontal(&basis) {
            Some(dir) => self.velocity += dir,
            None => log::warn!("Ignoring {direction:?} input: camera basis is vertical"),
        }
    }

    /// Accumulate one unit of vertical input in the direction of `delta`'s sign.
    ///
    /// Zero and non-finite values are ignored.
    pub fn delta_y(&mut self, delta: f32) {
        if delta == 0.0 || !delta.is_finite() {
            log::trace!("Ignoring vertical input {delta}");
            return;
        }
        self.velocity.y += delta.signum();
    }

    /// Advance the player by `delta_time` seconds against `walls`.
    ///
    /// Returns the committed position. On an invalid `delta_time` nothing
    /// changes and the accumulated input is kept.
    pub fn tick(&mut self, delta_time: f32, walls: &[Wall]) -> Result<Vec3, SimulationError> {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return Err(SimulationError::InvalidDeltaTime(delta_time));
        }

        let desired = self
            .velocity
            .try_normalize(f32::EPSILON)
            .map_or_else(Vec3::zeros, |dir| dir * self.max_speed);

        let movement = self.resolver.collide_with_world(&self.position, &(desired * delta_time), walls);
        let pre_gravity = self.position + movement;

        let fall = self.resolver.collide_with_world(&pre_gravity, &(self.gravity * delta_time), walls);
        self.position = pre_gravity + fall;

        self.velocity = Vec3::zeros();
        self.camera.set_position(self.position);

        Ok(self.position)
    }
}
