//! `list_plus_icon`
//!
//! Renders the "list plus" glyph into an opaque application icon and a transparent logo.

pub mod bounds;
pub mod compose;
pub mod config;
pub mod svg;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbImage, RgbaImage};

use bounds::recentre;
use compose::compose_icon;
pub use config::{Colour, IconConfig};
use svg::{icon_svg, rasterise};

/// File name of the opaque application icon.
pub const ICON_FILE_NAME: &str = "icon.png";
/// File name of the transparent logo.
pub const LOGO_FILE_NAME: &str = "logo.png";

/// Errors that can occur while generating the icons.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum GenerateError {
    /// The configuration cannot produce an icon.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ReadConfig {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The config file is not a valid config.
    #[error("failed to parse config file {}: {source}", path.display())]
    ParseConfig {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },
    /// There was an error while parsing the SVG.
    #[error("failed to parse SVG: {0}")]
    ParseSvg(#[from] resvg::usvg::Error),
    /// The render target of the given side length could not be created.
    #[error("failed to create a {0}x{0} pixmap")]
    CreatePixmap(u32),
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        /// The output directory.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// An output image could not be written.
    #[error("failed to save {}: {source}", path.display())]
    SaveImage {
        /// The file being written.
        path: PathBuf,
        /// The underlying error.
        source: image::ImageError,
    },
}

/// The images produced by a run and where they were written.
#[derive(Debug)]
pub struct GeneratedIcons {
    /// The glyph on the opaque background.
    pub icon: RgbImage,
    /// The centred glyph on a transparent canvas.
    pub logo: RgbaImage,
    /// Where `icon` was saved.
    pub icon_path: PathBuf,
    /// Where `logo` was saved.
    pub logo_path: PathBuf,
}

/// Renders the icon and logo images without touching the filesystem.
///
/// # Arguments
/// * `config`: Sizes and colours to use.
///
/// # Returns
/// The opaque icon and the transparent logo.
///
/// # Errors
/// A [`GenerateError`] if the config is invalid or the glyph cannot be rendered.
pub fn render_icons(config: &IconConfig) -> Result<(RgbImage, RgbaImage), GenerateError> {
    config.validate()?;

    let inner_size = config.inner_size();
    log::debug!(
        "Rendering icon at {inner_size}x{inner_size} inside a {0}x{0} canvas",
        config.canvas_size
    );

    let svg = icon_svg(config.icon_colour);
    let rendered = rasterise(&svg, inner_size)?;
    let logo = recentre(&rendered);
    let icon = compose_icon(&logo, config);

    Ok((icon, logo))
}

/// Renders both images and writes them to `icon.png` and `logo.png` in the output directory,
/// replacing any existing files.
///
/// # Arguments
/// * `config`: Sizes and colours to use.
/// * `out_dir`: Directory to write into, created if missing.
///
/// # Returns
/// The generated images and their paths.
///
/// # Errors
/// A [`GenerateError`] if rendering fails or either file cannot be written.
pub fn generate(config: &IconConfig, out_dir: &Path) -> Result<GeneratedIcons, GenerateError> {
    let (icon, logo) = render_icons(config)?;

    fs::create_dir_all(out_dir).map_err(|err| GenerateError::CreateOutputDir {
        path: out_dir.to_path_buf(),
        source: err,
    })?;

    let icon_path = out_dir.join(ICON_FILE_NAME);
    save_png(&icon, &icon_path)?;
    log::info!("Wrote {}", icon_path.display());

    let logo_path = out_dir.join(LOGO_FILE_NAME);
    save_png(&logo, &logo_path)?;
    log::info!("Wrote {}", logo_path.display());

    Ok(GeneratedIcons {
        icon,
        logo,
        icon_path,
        logo_path,
    })
}

/// Saves an image as a PNG file.
fn save_png<P>(image: &image::ImageBuffer<P, Vec<u8>>, path: &Path) -> Result<(), GenerateError>
where
    P: image::PixelWithColorType<Subpixel = u8>,
    [P::Subpixel]: image::EncodableLayout,
{
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| GenerateError::SaveImage {
            path: path.to_path_buf(),
            source: err,
        })
}
