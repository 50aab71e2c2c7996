use crate::units::Px;

/// Anything that can tell how wide a string renders at a given face size.
///
/// Implementations must be pure: measuring the same string at the same size always
/// yields the same width. Layout also assumes widths are additive, i.e. the width of
/// `"ab"` is the width of `"a"` plus the width of `"b"`.
pub trait TextMeasure {
    /// Calculate the width of a given string of text at the given face size
    fn width_of_text(&self, text: &str, size: Px) -> Px;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn width_of_text(&self, text: &str, size: Px) -> Px {
        (**self).width_of_text(text, size)
    }
}

/// Metrics where every glyph has the same advance, ignoring the face size. Whitespace
/// gets its own advance so tests can tune how many words fit on a line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedAdvance {
    pub glyph: Px,
    pub space: Px,
}

impl FixedAdvance {
    pub fn new(glyph: Px, space: Px) -> FixedAdvance {
        FixedAdvance { glyph, space }
    }
}

impl TextMeasure for FixedAdvance {
    fn width_of_text(&self, text: &str, _size: Px) -> Px {
        text.chars()
            .map(|ch| {
                if ch.is_whitespace() {
                    self.space
                } else {
                    self.glyph
                }
            })
            .sum()
    }
}
