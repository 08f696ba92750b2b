//! Mipmapped textures for the rasterizer
//!
//! A [`Texture`] is an ordered chain of progressively half-resolution
//! RGBA8 images, level 0 being the full-resolution base. The chain is
//! built once and read-only afterwards, so samplers can index any level
//! without re-checking its layout.

use image::{imageops, imageops::FilterType, DynamicImage, RgbaImage};

/// Error type for texture construction
#[derive(Debug)]
pub enum TextureError {
    /// A multi-level chain was requested but the base dimensions are not
    /// both powers of two. Pre-resize the source or request a single level.
    InvalidDimensions { width: u32, height: u32 },
    /// A failure from the underlying image operations, passed through
    /// unchanged.
    Image(image::ImageError),
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Image(e)
    }
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::InvalidDimensions { width, height } => write!(
                f,
                "Cannot build mipmaps: {}x{} is not power-of-two in both axes",
                width, height
            ),
            TextureError::Image(e) => write!(f, "Image processing error: {}", e),
        }
    }
}

impl std::error::Error for TextureError {}

/// Maximum number of mip levels for an image of the given size: one plus
/// the number of times the larger dimension halves before reaching 1.
/// A 1x1 image has exactly one level.
pub fn resolve_level_count(width: u32, height: u32) -> u32 {
    width.max(height).max(1).ilog2() + 1
}

/// Check the power-of-two precondition for a multi-level chain. A single
/// level needs no downsampling, so any dimensions pass.
pub fn validate_power_of_two(
    width: u32,
    height: u32,
    level_count: u32,
) -> Result<(), TextureError> {
    if level_count > 1 && !(width.is_power_of_two() && height.is_power_of_two()) {
        return Err(TextureError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Mipmapped texture: level 0 is the base image, each following level
/// halves both dimensions (floored at 1) down to 1x1.
#[derive(Debug, Clone)]
pub struct Texture {
    levels: Vec<RgbaImage>,
    width_log2: u8,
    height_log2: u8,
}

impl Texture {
    /// Build a mipmap chain from a source image.
    ///
    /// `level_count == 0` means "as many levels as the dimensions allow".
    /// Requesting more than one level requires power-of-two base
    /// dimensions; the source is never padded or the count clamped.
    ///
    /// The source is first converted to RGBA8 (color channels reordered,
    /// an alpha channel added if missing) and becomes level 0. Each
    /// further level is a bilinear downscale of the previous one.
    pub fn build(source: DynamicImage, level_count: u32) -> Result<Self, TextureError> {
        let width = source.width();
        let height = source.height();

        let level_count = if level_count == 0 {
            resolve_level_count(width, height)
        } else {
            level_count
        };
        validate_power_of_two(width, height, level_count)?;

        let mut levels = Vec::with_capacity(level_count as usize);
        levels.push(source.into_rgba8());

        for i in 1..level_count as usize {
            let prev = &levels[i - 1];
            let next_w = (prev.width() / 2).max(1);
            let next_h = (prev.height() / 2).max(1);
            levels.push(imageops::resize(prev, next_w, next_h, FilterType::Triangle));
        }

        // Integer bit-scan instead of the classic floor(log2(w) + 1e-4)
        // float trick (the epsilon guarded against log2 of an exact power
        // of two landing just below the integer). Only meaningful for
        // power-of-two bases.
        let width_log2 = width.max(1).ilog2() as u8;
        let height_log2 = height.max(1).ilog2() as u8;

        Ok(Self {
            levels,
            width_log2,
            height_log2,
        })
    }

    /// Number of mip levels, base included
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// A single mip level; 0 is the full-resolution base
    pub fn level(&self, level: usize) -> &RgbaImage {
        &self.levels[level]
    }

    /// All mip levels, largest first
    pub fn levels(&self) -> &[RgbaImage] {
        &self.levels
    }

    /// log2 of the base level width (for mip selection heuristics)
    pub fn width_log2(&self) -> u8 {
        self.width_log2
    }

    /// log2 of the base level height (for mip selection heuristics)
    pub fn height_log2(&self) -> u8 {
        self.height_log2
    }
}
