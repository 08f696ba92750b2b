//! Core primitives for software rasterization
//!
//! Two independent building blocks:
//! - Viewport transforms between clip space and screen space
//! - Mipmapped texture construction from a base image
//!
//! Model fitting, camera estimation and image file I/O live elsewhere;
//! this crate only covers the geometry and texture plumbing a CPU
//! rasterizer samples from.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod math;
mod texture;

pub use math::{clip_to_screen, screen_to_clip, Vec2};
pub use texture::{resolve_level_count, validate_power_of_two, Texture, TextureError};
