//! First-person player
//!
//! The player is a sphere driven by per-tick input. Input is accumulated as
//! unit directions relative to the camera, then turned into one swept move
//! and one swept fall per tick.
//!
//! # Module Organization
//!
//! - [`camera`] - Yaw/pitch camera that supplies the movement basis
//! - [`controller`] - The player itself: input accumulation and `tick`

pub mod camera;
pub mod controller;

pub use camera::FirstPersonCamera;
pub use controller::Player;

use crate::foundation::math::Vec3;

/// Horizontal input directions, relative to where the camera looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Along the camera front
    Forward,
    /// Against the camera front
    Backward,
    /// Against the camera right
    Left,
    /// Along the camera right
    Right,
}

/// Camera collaborator of the player.
///
/// The player reads the basis vectors to turn input into world directions
/// and pushes its committed position back after every tick.
pub trait PlayerCamera {
    /// Unit view direction
    fn front(&self) -> Vec3;

    /// Unit vector to the right of the view direction
    fn right(&self) -> Vec3;

    /// Move the camera to the player's new position
    fn set_position(&mut self, position: Vec3);
}
