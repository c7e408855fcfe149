//! Simulation world: walls plus one player

use crate::core::config::SimulationConfig;
use crate::foundation::math::{vec3_from_array, Vec3};
use crate::physics::collision::Wall;
use crate::player::{FirstPersonCamera, Player, PlayerCamera};
use super::{SceneError, SimulationError};

/// Owns the static colliders and the player moving among them
#[derive(Debug, Clone)]
pub struct World<C: PlayerCamera = FirstPersonCamera> {
    walls: Vec<Wall>,
    player: Player<C>,
}

impl<C: PlayerCamera + Default> World<C> {
    /// Build a world from configuration with a default camera
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SceneError> {
        Self::with_camera(config, C::default())
    }
}

impl<C: PlayerCamera> World<C> {
    /// Empty world around an existing player
    pub fn new(player: Player<C>) -> Self {
        Self {
            walls: Vec::new(),
            player,
        }
    }

    /// Build a world from configuration, handing the player `camera`.
    ///
    /// The configuration is validated first; every wall is then constructed
    /// and the first bad one is reported by its index.
    pub fn with_camera(config: &SimulationConfig, camera: C) -> Result<Self, SceneError> {
        config.validate()?;

        let walls = config
            .scene
            .walls
            .iter()
            .enumerate()
            .map(|(index, wall)| {
                Wall::new(vec3_from_array(wall.p1), vec3_from_array(wall.p2), vec3_from_array(wall.p3))
                    .map(|built| built.with_color(wall.color[0], wall.color[1], wall.color[2]))
                    .map_err(|source| SceneError::Geometry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let player = Player::from_config(&config.player, &config.resolver, camera)?;

        log::info!(
            "Scene built with {} walls, player at {:?} (radius {})",
            walls.len(),
            player.position(),
            player.radius()
        );

        Ok(Self { walls, player })
    }

    /// Add a wall. Meant for scene construction, before ticking starts.
    pub fn add_collider(&mut self, wall: Wall) {
        log::debug!("Adding collider #{} with normal {:?}", self.walls.len(), wall.plane().normal());
        self.walls.push(wall);
    }

    /// All walls in insertion order
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Mutable walls, for recoloring
    pub fn walls_mut(&mut self) -> &mut [Wall] {
        &mut self.walls
    }

    /// The player
    pub fn player(&self) -> &Player<C> {
        &self.player
    }

    /// Mutable player access, for input
    pub fn player_mut(&mut self) -> &mut Player<C> {
        &mut self.player
    }

    /// Advance the simulation by `delta_time` seconds.
    ///
    /// Returns the player's new position.
    pub fn tick(&mut self, delta_time: f32) -> Result<Vec3, SimulationError> {
        self.player.tick(delta_time, &self.walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{PlayerConfig, SceneConfig, WallConfig};
    use crate::physics::collision::GeometryError;
    use crate::player::Movement;
    use approx::assert_abs_diff_eq;

    const DT: f32 = 1.0 / 60.0;

    fn corridor_world() -> World {
        World::from_config(&SimulationConfig::new().with_scene(SceneConfig::corridor())).unwrap()
    }

    #[test]
    fn test_from_config_builds_walls_and_player() {
        let world = corridor_world();
        assert_eq!(world.walls().len(), 4);
        assert_eq!(world.player().position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(world.player().camera().position(), Vec3::new(0.0, 1.0, 0.0));

        // Colors are carried over
        assert_eq!(world.walls()[0].color(), [0.4, 0.4, 0.4]);
        assert_eq!(world.walls()[1].color(), crate::physics::collision::wall::DEFAULT_WALL_COLOR);
    }

    #[test]
    fn test_degenerate_wall_reports_index() {
        let scene = SceneConfig::corridor().with_wall(WallConfig::new([0.0; 3], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]));
        let result = World::<FirstPersonCamera>::from_config(&SimulationConfig::new().with_scene(scene));

        match result {
            Err(SceneError::Geometry { index, source }) => {
                assert_eq!(index, 4);
                assert!(matches!(source, GeometryError::Degenerate(_)));
            }
            other => panic!("expected a geometry error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SimulationConfig::new().with_player(PlayerConfig::new().with_radius(-1.0));
        let result = World::<FirstPersonCamera>::from_config(&config);
        assert!(matches!(result, Err(SceneError::Config(_))));
    }

    #[test]
    fn test_add_collider_and_tick() {
        let player_config = PlayerConfig::new().with_start_position(0.0, 5.0, 0.0);
        let player = Player::from_config(&player_config, &Default::default(), FirstPersonCamera::default()).unwrap();
        let mut world = World::new(player);
        assert!(world.walls().is_empty());

        world.add_collider(
            Wall::new(
                Vec3::new(-10.0, 0.0, -10.0),
                Vec3::new(-10.0, 0.0, 10.0),
                Vec3::new(10.0, 0.0, 10.0),
            )
            .unwrap(),
        );

        for _ in 0..180 {
            world.tick(DT).unwrap();
        }
        assert_abs_diff_eq!(world.player().position().y, 1.0, epsilon = 0.06);
        assert!(world.player().position().y >= 1.0 - 1e-3);
    }

    #[test]
    fn test_invalid_delta_time() {
        let mut world = corridor_world();
        assert_eq!(world.tick(0.0), Err(SimulationError::InvalidDeltaTime(0.0)));
        assert!(matches!(world.tick(f32::NAN), Err(SimulationError::InvalidDeltaTime(dt)) if dt.is_nan()));
        assert_eq!(world.player().position(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_walk_to_end_of_corridor() {
        let mut world = corridor_world();

        for _ in 0..300 {
            world.player_mut().move_player(Movement::Forward, DT);
            let position = world.tick(DT).unwrap();
            assert!(position.z >= -24.0 - 1e-3, "walked through the end wall: {position:?}");
        }

        let position = world.player().position();
        assert!(position.z <= -23.8, "stopped early: {position:?}");
        assert_abs_diff_eq!(position.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(position.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_slide_along_corridor_wall() {
        let mut world = corridor_world();
        // Looking diagonally into the right wall
        world.player_mut().camera_mut().set_orientation(-45.0, 0.0);

        for _ in 0..120 {
            world.player_mut().move_player(Movement::Forward, DT);
            let position = world.tick(DT).unwrap();
            assert!(position.x <= 2.0 + 1e-3, "pushed into the side wall: {position:?}");
        }

        let position = world.player().position();
        assert!(position.x >= 1.8, "never reached the wall: {position:?}");
        // Still moving down the corridor after touching the wall
        assert!(position.z < -10.0 && position.z > -24.0, "did not slide: {position:?}");
        assert_abs_diff_eq!(position.y, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_recolor_walls() {
        let mut world = corridor_world();
        world.walls_mut()[3].set_color(0.0, 0.0, 1.0);
        assert_eq!(world.walls()[3].color(), [0.0, 0.0, 1.0]);
    }
}
