//! Math utilities and types
//!
//! Provides the vector types shared by the collision core, the player
//! controller and the configuration layer.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Build a [`Vec3`] from a plain `[x, y, z]` array (the config file layout)
pub fn vec3_from_array(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

/// Flatten a [`Vec3`] back into a plain `[x, y, z]` array
pub fn vec3_to_array(v: &Vec3) -> [f32; 3] {
    [v.x, v.y, v.z]
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Drop the vertical component and renormalize.
    ///
    /// Returns `None` when the vector is (close to) vertical, where the
    /// horizontal direction is undefined.
    pub fn flatten_horizontal(v: &Vec3) -> Option<Vec3> {
        Vec3::new(v.x, 0.0, v.z).try_normalize(f32::EPSILON)
    }

    /// True when every component is finite (no NaN or infinity)
    pub fn is_finite(v: &Vec3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}
