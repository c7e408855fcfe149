//! Yaw/pitch first-person camera
//!
//! Only the orientation basis lives here; view and projection matrices belong
//! to whatever renders the scene.

use crate::foundation::math::{utils, Vec3};
use super::PlayerCamera;

/// Default yaw in degrees, looking down -z
pub const DEFAULT_YAW: f32 = -90.0;

/// Pitch is kept strictly inside this bound (degrees) so the view never flips
pub const PITCH_LIMIT: f32 = 89.0;

/// Default mouse sensitivity in degrees per unit of mouse motion
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Camera orientation from yaw and pitch angles, in degrees
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonCamera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    mouse_sensitivity: f32,
    world_up: Vec3,
}

impl FirstPersonCamera {
    /// Camera at `position` looking down -z
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: DEFAULT_YAW,
            pitch: 0.0,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            world_up: Vec3::y(),
        }
    }

    /// Set mouse sensitivity
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the orientation directly. Pitch is clamped.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply mouse motion
    pub fn rotate(&mut self, x_offset: f32, y_offset: f32) {
        self.set_orientation(
            self.yaw + x_offset * self.mouse_sensitivity,
            self.pitch + y_offset * self.mouse_sensitivity,
        );
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(Vec3::zeros())
    }
}

impl PlayerCamera for FirstPersonCamera {
    fn front(&self) -> Vec3 {
        let yaw = utils::deg_to_rad(self.yaw);
        let pitch = utils::deg_to_rad(self.pitch);

        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    fn right(&self) -> Vec3 {
        self.front().cross(&self.world_up).normalize()
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }
}
