//! Core library for sampled line/sphere collision detection.

pub mod collision;
pub mod config;
pub mod geometry;
pub mod io;
pub mod scene;

pub use collision::{detect_collisions, detect_with_config, CollisionError, CollisionReport};
pub use config::DetectionConfig;
