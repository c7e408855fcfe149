//! # Core Module
//!
//! Shared configuration types used by the scene builder and the demo
//! application.
//!
//! ## Organization
//!
//! - **Config**: Serde-backed simulation configuration (player, resolver, scene)

pub mod config;

// Re-export foundation for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    Config,
    ConfigError,
    ConfigFormat,
    PlayerConfig,
    ResolverConfig,
    SceneConfig,
    SimulationConfig,
    WallConfig,
};
