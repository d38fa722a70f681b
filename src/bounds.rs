//! `bounds`
//!
//! Finds where the glyph actually sits in its render and moves it to the middle.
//! The strokes are not centred within the 256 unit viewbox, so the render is
//! visibly off-centre unless it is shifted.

use image::{imageops, RgbaImage};

/// The smallest rectangle containing every pixel that is not fully transparent.
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// First column with visible content.
    pub left: u32,
    /// First row with visible content.
    pub top: u32,
    /// One past the last column with visible content.
    pub right: u32,
    /// One past the last row with visible content.
    pub bottom: u32,
}

impl BoundingBox {
    /// Width of the box in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the box in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Computes the bounding box of the pixels with non-zero alpha.
///
/// # Returns
/// The bounding box, or `None` if the image is entirely transparent.
#[must_use]
pub fn bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let mut found: Option<BoundingBox> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }

        found = Some(match found {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(bbox) => BoundingBox {
                left: bbox.left.min(x),
                top: bbox.top.min(y),
                right: bbox.right.max(x + 1),
                bottom: bbox.bottom.max(y + 1),
            },
        });
    }

    found
}

/// Crops an image to its visible content and places that content in the middle of a transparent
/// canvas the same size as the original.
///
/// Odd leftover space goes to the right and bottom. A fully transparent image has nothing to
/// centre and is returned unchanged.
#[must_use]
pub fn recentre(image: &RgbaImage) -> RgbaImage {
    let Some(bbox) = bounding_box(image) else {
        log::warn!("Rendered icon is fully transparent, skipping recentring");
        return image.clone();
    };
    log::debug!("Icon bounding box: {bbox:?}");

    let cropped =
        imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image();

    let (width, height) = image.dimensions();
    let paste_x = (width - cropped.width()) / 2;
    let paste_y = (height - cropped.height()) / 2;
    log::debug!("Pasting cropped icon at ({paste_x}, {paste_y})");

    // A fresh buffer is zeroed, which is fully transparent.
    let mut centred = RgbaImage::new(width, height);
    imageops::replace(&mut centred, &cropped, i64::from(paste_x), i64::from(paste_y));
    centred
}
