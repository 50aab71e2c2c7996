use crate::layout::measure::TextMeasure;
use crate::layout::wrap::Line;
use crate::style::CaptionStyle;
use crate::units::Px;

/// A single word with a fully resolved position. `y` is the top of the line box the word
/// belongs to; the glyph baseline sits one ascent below it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction<'a> {
    pub x: Px,
    pub y: Px,
    pub word: &'a str,
}

/// Spreads the words of each line across the full target width.
///
/// The free space on a line is divided evenly between the gaps, which may make the gaps
/// negative when the words alone are wider than the target. The last word is always
/// placed flush against the right edge so rounding in the earlier gaps never shows up as
/// a ragged margin. A line holding a single word has no gaps to stretch and is
/// left-aligned instead.
pub struct Justifier<'s, M: TextMeasure + ?Sized> {
    measure: &'s M,
    style: &'s CaptionStyle,
}

impl<'s, M: TextMeasure + ?Sized> Justifier<'s, M> {
    pub fn new(measure: &'s M, style: &'s CaptionStyle) -> Self {
        Justifier { measure, style }
    }

    /// Position every word of `lines`, left to right and top to bottom
    pub fn render<'a>(&self, target_width: u32, lines: &[Line<'a>]) -> Vec<DrawInstruction<'a>> {
        let size = self.style.font_size;
        let max_width = Px::from(target_width);

        let mut instructions: Vec<DrawInstruction<'a>> =
            Vec::with_capacity(lines.iter().map(Line::len).sum());
        let mut y = self.style.initial_line_offset();

        for line in lines {
            match line.words.as_slice() {
                [] => {}
                [word] => instructions.push(DrawInstruction {
                    x: Px::ZERO,
                    y,
                    word: *word,
                }),
                [init @ .., last] => {
                    let text_width = self.measure.width_of_text(&line.words.concat(), size);
                    let space_width = (max_width - text_width) / (init.len() as f32);

                    let mut x = Px::ZERO;
                    for word in init.iter().copied() {
                        instructions.push(DrawInstruction { x, y, word });
                        x += self.measure.width_of_text(word, size) + space_width;
                    }

                    let last_width = self.measure.width_of_text(last, size);
                    instructions.push(DrawInstruction {
                        x: max_width - last_width,
                        y,
                        word: *last,
                    });
                }
            }

            y += self.style.line_height;
        }

        instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::measure::FixedAdvance;

    fn metrics() -> FixedAdvance {
        FixedAdvance::new(Px(10.0), Px(30.0))
    }

    #[test]
    fn words_span_the_full_width() {
        let style = CaptionStyle::default();
        let m = metrics();
        let lines = vec![Line::new(vec!["aa", "bbb", "c"])];
        let drawn = Justifier::new(&m, &style).render(200, &lines);

        // 60px of text leaves 140px, split over two gaps
        assert_eq!(
            drawn,
            vec![
                DrawInstruction { x: Px(0.0), y: Px(-10.0), word: "aa" },
                DrawInstruction { x: Px(90.0), y: Px(-10.0), word: "bbb" },
                DrawInstruction { x: Px(190.0), y: Px(-10.0), word: "c" },
            ]
        );
    }

    #[test]
    fn last_word_is_flush_right() {
        let style = CaptionStyle::default();
        let m = FixedAdvance::new(Px(7.0), Px(3.0));
        let lines = vec![
            Line::new(vec!["one", "two", "three", "four"]),
            Line::new(vec!["x", "yy"]),
        ];
        let drawn = Justifier::new(&m, &style).render(301, &lines);

        for d in drawn.iter().filter(|d| d.word == "four" || d.word == "yy") {
            assert_eq!(d.x + m.width_of_text(d.word, style.font_size), Px(301.0));
        }
        assert_eq!(drawn[0].x, Px(0.0));
        assert_eq!(drawn[4].x, Px(0.0));
    }

    #[test]
    fn lines_advance_by_line_height() {
        let style = CaptionStyle::default();
        let m = metrics();
        let lines = vec![
            Line::new(vec!["a", "b"]),
            Line::new(vec!["c", "d"]),
            Line::new(vec!["e"]),
        ];
        let drawn = Justifier::new(&m, &style).render(100, &lines);
        let ys: Vec<Px> = drawn.iter().map(|d| d.y).collect();
        assert_eq!(ys, vec![Px(-10.0), Px(-10.0), Px(23.0), Px(23.0), Px(56.0)]);
    }

    #[test]
    fn single_word_lines_are_left_aligned() {
        let style = CaptionStyle::default();
        let m = metrics();
        let lines = vec![Line::new(vec!["supercalifragilisticexpialidocious"])];
        let drawn = Justifier::new(&m, &style).render(200, &lines);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].x, Px(0.0));
        assert_eq!(drawn[0].word, "supercalifragilisticexpialidocious");
    }

    #[test]
    fn overfull_lines_get_negative_gaps() {
        let style = CaptionStyle::default();
        let m = metrics();
        let lines = vec![Line::new(vec!["aaaaaaaaaa", "bbbbbbbbbb"])];
        let drawn = Justifier::new(&m, &style).render(150, &lines);
        assert_eq!(drawn[0].x, Px(0.0));
        assert_eq!(drawn[1].x, Px(50.0));
    }

    #[test]
    fn no_lines_draw_nothing() {
        let style = CaptionStyle::default();
        let m = metrics();
        assert!(Justifier::new(&m, &style).render(200, &[]).is_empty());
    }
}
