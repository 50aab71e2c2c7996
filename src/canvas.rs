//! The text canvas and the multiplicative blend that puts it on top of a base image.

use crate::colour::Colour;
use crate::layout::{DrawInstruction, TextMeasure};
use crate::units::Px;
use image::{Rgb, RgbImage};

/// A typeface that can rasterize text as well as measure it.
pub trait GlyphPainter: TextMeasure {
    /// Distance from the top of a line box down to the baseline
    fn ascent(&self, size: Px) -> Px;

    /// Rasterize `text` with its line box's top-left corner at `origin`, reporting the
    /// coverage (0.0 to 1.0) of every touched pixel. Pixels may fall outside any canvas.
    fn paint_text(
        &self,
        text: &str,
        size: Px,
        origin: (Px, Px),
        coverage: &mut dyn FnMut(i32, i32, f32),
    );
}

/// A solid-filled RGB image that words are painted onto
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Colour) -> Canvas {
        Canvas {
            pixels: RgbImage::from_pixel(width, height, background.to_rgb8()),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Paint one word, blending the colour over what is already there by the glyph
    /// coverage. Anything outside the canvas is clipped.
    pub fn draw_word<P: GlyphPainter + ?Sized>(
        &mut self,
        painter: &P,
        size: Px,
        instruction: &DrawInstruction,
        colour: Colour,
    ) {
        let Rgb(fill) = colour.to_rgb8();
        let (width, height) = self.pixels.dimensions();
        let pixels = &mut self.pixels;

        painter.paint_text(
            instruction.word,
            size,
            (instruction.x, instruction.y),
            &mut |x, y, coverage| {
                if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                    return;
                }

                let coverage = coverage.clamp(0.0, 1.0);
                let px = pixels.get_pixel_mut(x as u32, y as u32);
                for (channel, fill) in px.0.iter_mut().zip(fill) {
                    let blended = *channel as f32 * (1.0 - coverage) + fill as f32 * coverage;
                    *channel = blended.round() as u8;
                }
            },
        );
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbImage {
        self.pixels
    }
}

/// Multiply two same-sized images channel by channel, normalised back to 0-255. White
/// leaves the other image untouched and black turns it black.
///
/// Panics if the images differ in size.
pub fn multiply(base: &RgbImage, overlay: &RgbImage) -> RgbImage {
    assert_eq!(
        base.dimensions(),
        overlay.dimensions(),
        "multiplied images must be the same size"
    );

    let mut out = base.clone();
    for (px, over) in out.pixels_mut().zip(overlay.pixels()) {
        for (channel, over) in px.0.iter_mut().zip(over.0) {
            *channel = ((*channel as u16 * over as u16) / 255) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    /// Paints every glyph as a full-coverage 10x10 block
    struct Blocks;

    impl TextMeasure for Blocks {
        fn width_of_text(&self, text: &str, _size: Px) -> Px {
            Px(10.0 * text.chars().count() as f32)
        }
    }

    impl GlyphPainter for Blocks {
        fn ascent(&self, _size: Px) -> Px {
            Px(10.0)
        }

        fn paint_text(
            &self,
            text: &str,
            _size: Px,
            origin: (Px, Px),
            coverage: &mut dyn FnMut(i32, i32, f32),
        ) {
            for (i, _) in text.chars().enumerate() {
                let left = origin.0 .0 as i32 + 10 * i as i32;
                for y in 0..10 {
                    for x in 0..10 {
                        coverage(left + x, origin.1 .0 as i32 + y, 1.0);
                    }
                }
            }
        }
    }

    fn word(x: f32, y: f32, word: &str) -> DrawInstruction {
        DrawInstruction {
            x: Px(x),
            y: Px(y),
            word,
        }
    }

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(4, 3, Colour::new_rgb_bytes(1, 2, 3));
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert!(canvas.as_image().pixels().all(|p| *p == Rgb([1, 2, 3])));
    }

    #[test]
    fn words_are_painted_in_the_font_colour() {
        let mut canvas = Canvas::new(30, 20, colours::BLACK);
        canvas.draw_word(&Blocks, Px(48.0), &word(5.0, 5.0, "ab"), colours::WHITE);

        let img = canvas.into_image();
        assert_eq!(*img.get_pixel(5, 5), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(24, 14), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(4, 5), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(25, 5), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(5, 15), Rgb([0, 0, 0]));
    }

    #[test]
    fn painting_is_clipped_to_the_canvas() {
        let mut canvas = Canvas::new(10, 10, colours::BLACK);
        canvas.draw_word(&Blocks, Px(48.0), &word(-5.0, -10.0, "abc"), colours::WHITE);
        canvas.draw_word(&Blocks, Px(48.0), &word(8.0, 8.0, "abc"), colours::WHITE);

        let img = canvas.into_image();
        assert_eq!(*img.get_pixel(9, 9), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn partial_coverage_blends() {
        struct Faint;
        impl TextMeasure for Faint {
            fn width_of_text(&self, _text: &str, _size: Px) -> Px {
                Px(1.0)
            }
        }
        impl GlyphPainter for Faint {
            fn ascent(&self, _size: Px) -> Px {
                Px(0.0)
            }
            fn paint_text(
                &self,
                _text: &str,
                _size: Px,
                _origin: (Px, Px),
                coverage: &mut dyn FnMut(i32, i32, f32),
            ) {
                coverage(0, 0, 0.5);
            }
        }

        let mut canvas = Canvas::new(1, 1, colours::BLACK);
        canvas.draw_word(&Faint, Px(1.0), &word(0.0, 0.0, "x"), colours::WHITE);
        assert_eq!(*canvas.as_image().get_pixel(0, 0), Rgb([128, 128, 128]));
    }

    #[test]
    fn multiply_normalises_the_product() {
        let base = RgbImage::from_pixel(2, 1, Rgb([200, 100, 255]));
        let mut overlay = RgbImage::from_pixel(2, 1, Rgb([255, 255, 255]));
        overlay.put_pixel(1, 0, Rgb([128, 0, 255]));

        let out = multiply(&base, &overlay);
        assert_eq!(*out.get_pixel(0, 0), Rgb([200, 100, 255]));
        assert_eq!(*out.get_pixel(1, 0), Rgb([100, 0, 255]));
    }

    #[test]
    #[should_panic(expected = "same size")]
    fn multiply_rejects_mismatched_sizes() {
        let a = RgbImage::new(2, 2);
        let b = RgbImage::new(3, 2);
        multiply(&a, &b);
    }
}
