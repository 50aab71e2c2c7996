use crate::canvas::GlyphPainter;
use crate::error::CaptionError;
use crate::layout::TextMeasure;
use crate::units::Px;
use ab_glyph::{Font as _, FontArc, PxScale};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts.
///
/// Metrics (advances and ascent) are read straight from the font tables and scaled
/// by `size / units_per_em`, so a size of 48 means an em of 48 pixels. Glyph outlines are
/// rasterized at the same em-based scale, so painted words are exactly as wide as they
/// measure.
///
/// Characters the font has no glyph for take up no space and are not painted.
pub struct Font {
    pub face: OwnedFace,
    outlines: FontArc,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, CaptionError> {
        // metrics and outlines each parse and own a copy of the font data
        let face = OwnedFace::from_vec(bytes.clone(), 0)?;
        let outlines = FontArc::try_from_vec(bytes)?;

        let font = Font { face, outlines };
        tracing::debug!(
            family = font.family().as_deref().unwrap_or("<unnamed>"),
            glyphs = font.face.as_face_ref().number_of_glyphs(),
            "loaded font"
        );
        Ok(font)
    }

    /// Read a font file from disk and load it
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Font, CaptionError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Px) -> f32 {
        size.0 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    fn advance(&self, gid: u16, size: Px) -> Px {
        Px(self.scaling(size)
            * self
                .face
                .as_face_ref()
                .glyph_hor_advance(GlyphId(gid))
                .unwrap_or_default() as f32)
    }

    /// The rasterizer's scale is relative to the face height rather than the em
    fn px_scale(&self, size: Px) -> PxScale {
        let units_per_em = self
            .outlines
            .units_per_em()
            .unwrap_or(self.face.as_face_ref().units_per_em() as f32);
        PxScale::from(size.0 * self.outlines.height_unscaled() / units_per_em)
    }
}

impl TextMeasure for Font {
    fn width_of_text(&self, text: &str, size: Px) -> Px {
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| self.advance(gid, size))
            .sum()
    }
}

impl GlyphPainter for Font {
    fn ascent(&self, size: Px) -> Px {
        Font::ascent(self, size)
    }

    fn paint_text(
        &self,
        text: &str,
        size: Px,
        origin: (Px, Px),
        coverage: &mut dyn FnMut(i32, i32, f32),
    ) {
        let scale = self.px_scale(size);
        let baseline = origin.1 + Font::ascent(self, size);
        let mut x = origin.0;

        for gid in text.chars().filter_map(|ch| self.glyph_id(ch)) {
            let glyph = ab_glyph::GlyphId(gid)
                .with_scale_and_position(scale, ab_glyph::point(x.0, baseline.0));

            if let Some(outlined) = self.outlines.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, c| {
                    coverage(
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        c,
                    )
                });
            }

            x += self.advance(gid, size);
        }
    }
}
