//! `svg`
//!
//! The glyph artwork and its rasterisation.

use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use crate::{config::Colour, GenerateError};

/// The "list plus" glyph from Phosphor Icons, drawn in a 256 unit square.
/// `{colour}` is replaced with the stroke colour.
pub const SVG_TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256">
  <line x1="40" y1="64" x2="216" y2="64" fill="none" stroke="{colour}" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
  <line x1="40" y1="128" x2="216" y2="128" fill="none" stroke="{colour}" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
  <line x1="40" y1="192" x2="144" y2="192" fill="none" stroke="{colour}" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
  <line x1="184" y1="192" x2="232" y2="192" fill="none" stroke="{colour}" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
  <line x1="208" y1="168" x2="208" y2="216" fill="none" stroke="{colour}" stroke-linecap="round" stroke-linejoin="round" stroke-width="16"/>
</svg>"#;

/// Builds the glyph SVG with the given stroke colour.
#[must_use]
pub fn icon_svg(colour: Colour) -> String {
    SVG_TEMPLATE.replace("{colour}", &colour.to_string())
}

/// Renders an SVG into a transparent square image, scaled to fit while keeping its aspect ratio.
///
/// # Arguments
/// * `svg`: The SVG document.
/// * `size`: Side length of the output image, in pixels.
///
/// # Returns
/// The rendered image with straight (not premultiplied) alpha.
///
/// # Errors
/// [`GenerateError::ParseSvg`] if the document cannot be parsed, [`GenerateError::CreatePixmap`]
/// if `size` is zero or too large to allocate.
pub fn rasterise(svg: &str, size: u32) -> Result<RgbaImage, GenerateError> {
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(GenerateError::CreatePixmap(size))?;

    #[allow(clippy::cast_precision_loss)]
    let size_f = size as f32;
    let scale = (size_f / tree.size().width()).min(size_f / tree.size().height());
    log::debug!(
        "Rendering {}x{} SVG at scale {scale}",
        tree.size().width(),
        tree.size().height()
    );

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha, image expects it straight.
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let colour = pixel.demultiply();
            [colour.red(), colour.green(), colour.blue(), colour.alpha()]
        })
        .collect();

    RgbaImage::from_vec(size, size, data).ok_or(GenerateError::CreatePixmap(size))
}
