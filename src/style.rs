//! Caption styling: everything about how a caption looks, independent of the font face
//! used to draw it.

use crate::colour::{colours, Colour};
use crate::error::CaptionError;
use crate::units::Px;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_font_size() -> Px {
    Px(48.0)
}

fn default_line_height() -> Px {
    Px(33.0)
}

fn default_font_colour() -> Colour {
    colours::WHITE
}

fn default_background_colour() -> Colour {
    colours::BLACK
}

/// Fixed layout and colour configuration shared by the wrapper, the justifier, and the
/// compositor.
///
/// The line height is independent of the font size, so captions can be set tighter (or
/// looser) than the face's natural leading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionStyle {
    /// Face size; one em in pixels
    #[serde(default = "default_font_size")]
    pub font_size: Px,
    /// Vertical distance between consecutive lines
    #[serde(default = "default_line_height")]
    pub line_height: Px,
    /// Colour the words are painted in on the canvas
    #[serde(default = "default_font_colour")]
    pub font_colour: Colour,
    /// Colour the canvas is filled with before any words are painted
    #[serde(default = "default_background_colour")]
    pub background_colour: Colour,
    /// Cycle through the caption again once it runs out, until the image is full
    #[serde(default)]
    pub repeat_text: bool,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        CaptionStyle {
            font_size: default_font_size(),
            line_height: default_line_height(),
            font_colour: default_font_colour(),
            background_colour: default_background_colour(),
            repeat_text: false,
        }
    }
}

impl CaptionStyle {
    /// Parse a style from a YAML document. Missing fields take their default values
    pub fn from_yaml(yaml: &str) -> Result<CaptionStyle, CaptionError> {
        let style: CaptionStyle = serde_yaml::from_str(yaml)?;
        style.validate()?;
        Ok(style)
    }

    /// Check that the font size and line height are positive, finite lengths
    pub fn validate(&self) -> Result<(), CaptionError> {
        for (field, value) in [
            ("font_size", self.font_size),
            ("line_height", self.line_height),
        ] {
            if !(value.0.is_finite() && value.0 > 0.0) {
                return Err(CaptionError::StyleRange(format!(
                    "{field} must be a positive length, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Read and parse a YAML style document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CaptionStyle, CaptionError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Vertical offset of the first line's box. Pulling the first line up by two thirds of
    /// the gap between the em size and the line height puts the cap height close to the
    /// top edge of the image.
    pub fn initial_line_offset(&self) -> Px {
        -((self.font_size - self.line_height) * 2.0 / 3.0)
    }

    pub fn with_font_size(mut self, font_size: Px) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_line_height(mut self, line_height: Px) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_colours(mut self, font_colour: Colour, background_colour: Colour) -> Self {
        self.font_colour = font_colour;
        self.background_colour = background_colour;
        self
    }

    pub fn with_repeat_text(mut self, repeat_text: bool) -> Self {
        self.repeat_text = repeat_text;
        self
    }
}
