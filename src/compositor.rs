use crate::canvas::{multiply, Canvas, GlyphPainter};
use crate::error::CaptionError;
use crate::font::Font;
use crate::layout::{DrawInstruction, Justifier, LineWrapper};
use crate::style::CaptionStyle;
use image::{DynamicImage, GenericImageView, RgbImage};
use std::path::Path;

/// Captions images: wraps and justifies the text to the image's size, paints it onto a
/// canvas, and multiplies the canvas over the image.
///
/// With the default style (white text on black) everything but the words turns black and
/// the words show the base image through them.
pub struct Compositor<F: GlyphPainter> {
    font: F,
    style: CaptionStyle,
}

impl Compositor<Font> {
    /// Load the font at `path` and build a compositor around it
    pub fn from_font_path<P: AsRef<Path>>(
        path: P,
        style: CaptionStyle,
    ) -> Result<Compositor<Font>, CaptionError> {
        let font = Font::from_path(path)?;
        Ok(Compositor::new(font, style))
    }
}

impl<F: GlyphPainter> Compositor<F> {
    pub fn new(font: F, style: CaptionStyle) -> Compositor<F> {
        Compositor { font, style }
    }

    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }

    /// Wrap and justify `text` for a `width` x `height` image without painting anything.
    /// Words that did not fit are simply absent from the result.
    pub fn layout<'a>(&self, width: u32, height: u32, text: &'a str) -> Vec<DrawInstruction<'a>> {
        let lines = LineWrapper::new(&self.font, &self.style).wrap(width, height, text);
        tracing::debug!(width, height, lines = lines.len(), "wrapped caption");
        Justifier::new(&self.font, &self.style).render(width, &lines)
    }

    /// Paint `text` onto a fresh `width` x `height` canvas
    pub fn render_canvas(&self, width: u32, height: u32, text: &str) -> Canvas {
        let mut canvas = Canvas::new(width, height, self.style.background_colour);
        for instruction in self.layout(width, height, text) {
            canvas.draw_word(
                &self.font,
                self.style.font_size,
                &instruction,
                self.style.font_colour,
            );
        }
        canvas
    }

    /// Caption an already decoded image. The result is 8-bit RGB and the same size as
    /// `base`; any alpha channel in `base` is discarded.
    pub fn composite(&self, base: &DynamicImage, text: &str) -> RgbImage {
        let (width, height) = base.dimensions();
        let canvas = self.render_canvas(width, height, text);
        multiply(&base.to_rgb8(), canvas.as_image())
    }

    /// Decode the image at `path` and caption it
    pub fn composite_path<P: AsRef<Path>>(
        &self,
        path: P,
        text: &str,
    ) -> Result<RgbImage, CaptionError> {
        let path = path.as_ref();
        let base = image::open(path)?;
        tracing::debug!(path = %path.display(), "decoded base image");
        Ok(self.composite(&base, text))
    }

    /// Decode an in-memory image (in any format `image` recognises) and caption it
    pub fn composite_bytes(&self, bytes: &[u8], text: &str) -> Result<RgbImage, CaptionError> {
        let base = image::load_from_memory(bytes)?;
        Ok(self.composite(&base, text))
    }
}
