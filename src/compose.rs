//! `compose`
//!
//! Places the glyph on a solid background to make the opaque application icon.

use image::{imageops, DynamicImage, Rgba, RgbImage, RgbaImage};

use crate::config::{Colour, IconConfig};

/// Creates an opaque square canvas filled with a single colour.
#[must_use]
pub fn background(size: u32, colour: Colour) -> RgbaImage {
    let [r, g, b] = colour.0;
    RgbaImage::from_pixel(size, size, Rgba([r, g, b, u8::MAX]))
}

/// Composites the glyph onto the configured background at `(padding, padding)`, using the
/// glyph's alpha channel as the mask.
///
/// # Arguments
/// * `icon`: The centred, transparent glyph.
/// * `config`: Supplies the canvas size, padding and background colour.
///
/// # Returns
/// The opaque icon, without an alpha channel.
#[must_use]
pub fn compose_icon(icon: &RgbaImage, config: &IconConfig) -> RgbImage {
    let mut canvas = background(config.canvas_size, config.background);
    let offset = i64::from(config.padding);
    imageops::overlay(&mut canvas, icon, offset, offset);

    DynamicImage::ImageRgba8(canvas).into_rgb8()
}
