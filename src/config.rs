//! `config`
//!
//! Parameters controlling how the icon is generated.

use std::{fmt::Display, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::GenerateError;

/// Side length of the opaque application icon, in pixels.
pub const ICON_SIZE: u32 = 1024;
/// Space between the edge of the icon and the glyph, in pixels.
pub const PADDING: u32 = 180;
/// Largest accepted `canvas_size`, a 16384 px square RGBA canvas is 1 GiB.
pub const MAX_CANVAS_SIZE: u32 = 16384;
/// Colour behind the glyph in the application icon.
pub const BACKGROUND_COLOUR: Colour = Colour([0x00, 0x00, 0x00]);
/// Colour of the glyph strokes.
pub const ICON_COLOUR: Colour = Colour([0xFF, 0xFF, 0xFF]);

/// An opaque RGB colour, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour(pub [u8; 3]);

impl PartialEq<[u8; 3]> for Colour {
    fn eq(&self, other: &[u8; 3]) -> bool {
        self.0.eq(other)
    }
}

/// A colour string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour {0:?}, expected #RRGGBB or #RGB")]
pub struct InvalidColour(String);

impl FromStr for Colour {
    type Err = InvalidColour;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColour(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Colour([
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ])),
            // #RGB expands each digit, so #F80 is #FF8800.
            3 => Ok(Colour([
                channel(&hex[0..1])? * 0x11,
                channel(&hex[1..2])? * 0x11,
                channel(&hex[2..3])? * 0x11,
            ])),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Colour {
    type Error = InvalidColour;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(value: Colour) -> Self {
        value.to_string()
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

/// Everything needed to generate the icon and logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::module_name_repetitions)]
pub struct IconConfig {
    /// Side length of `icon.png`, in pixels.
    pub canvas_size: u32,
    /// Padding on every side of the glyph within `icon.png`, in pixels.
    pub padding: u32,
    /// Fill colour of `icon.png`.
    pub background: Colour,
    /// Stroke colour of the glyph.
    pub icon_colour: Colour,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            canvas_size: ICON_SIZE,
            padding: PADDING,
            background: BACKGROUND_COLOUR,
            icon_colour: ICON_COLOUR,
        }
    }
}

impl IconConfig {
    /// Loads a config from a JSON file, fields missing from the file keep their defaults.
    ///
    /// # Arguments
    /// * `path`: The JSON file to read.
    ///
    /// # Returns
    /// The loaded config, not yet validated.
    ///
    /// # Errors
    /// [`GenerateError::ReadConfig`] if the file cannot be read, [`GenerateError::ParseConfig`]
    /// if it is not a valid config.
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let contents = fs::read_to_string(path).map_err(|err| GenerateError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })?;

        serde_json::from_str(&contents).map_err(|err| GenerateError::ParseConfig {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Side length of the square the glyph is rendered into, `logo.png` has this size.
    #[must_use]
    pub fn inner_size(&self) -> u32 {
        self.canvas_size.saturating_sub(self.padding.saturating_mul(2))
    }

    /// Checks that the padding leaves room for the glyph.
    ///
    /// # Errors
    /// [`GenerateError::InvalidConfig`] if the canvas is empty or larger than
    /// [`MAX_CANVAS_SIZE`], or the padding consumes all of it.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.canvas_size == 0 {
            return Err(GenerateError::InvalidConfig(
                "canvas size must be greater than zero".to_string(),
            ));
        }

        if self.canvas_size > MAX_CANVAS_SIZE {
            return Err(GenerateError::InvalidConfig(format!(
                "canvas size of {}px exceeds the maximum of {MAX_CANVAS_SIZE}px",
                self.canvas_size
            )));
        }

        if self.inner_size() == 0 {
            return Err(GenerateError::InvalidConfig(format!(
                "padding of {}px leaves no room for the icon on a {}px canvas",
                self.padding, self.canvas_size
            )));
        }

        Ok(())
    }
}
