use crate::layout::measure::TextMeasure;
use crate::style::CaptionStyle;
use crate::units::Px;

/// One row of words that are rendered together
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line<'a> {
    pub words: Vec<&'a str>,
}

impl<'a> Line<'a> {
    pub fn new(words: Vec<&'a str>) -> Line<'a> {
        Line { words }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// The words joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Greedy word wrapper bounded by a target box.
///
/// Lines are filled word by word while the line (words joined by single spaces) still
/// fits the target width. A word is never split: one that is wider than the target on its
/// own gets a line to itself and overflows it.
///
/// Every time a line is finished the running height grows by one line height, and once it
/// reaches the target height wrapping stops. Words that were not placed by then are
/// dropped, so callers that care about truncation should compare the returned lines with
/// their input.
pub struct LineWrapper<'s, M: TextMeasure + ?Sized> {
    measure: &'s M,
    style: &'s CaptionStyle,
}

impl<'s, M: TextMeasure + ?Sized> LineWrapper<'s, M> {
    pub fn new(measure: &'s M, style: &'s CaptionStyle) -> Self {
        LineWrapper { measure, style }
    }

    /// Split `text` into lines that fit `target_width`, stopping at `target_height`
    pub fn wrap<'a>(&self, target_width: u32, target_height: u32, text: &'a str) -> Vec<Line<'a>> {
        let words: Vec<&'a str> = text.split_whitespace().collect();
        if words.is_empty() || target_height == 0 {
            return Vec::new();
        }

        let size = self.style.font_size;
        let max_width = Px::from(target_width);
        let max_height = Px::from(target_height);
        let space_width = self.measure.width_of_text(" ", size);

        let widths: Vec<Px> = words
            .iter()
            .map(|word| self.measure.width_of_text(word, size))
            .collect();

        // repeating only ends once finished lines fill the height, which needs both a
        // measurable caption and lines that take up room
        let repeat = self.style.repeat_text
            && self.style.line_height > Px::ZERO
            && widths.iter().copied().sum::<Px>() + space_width > Px::ZERO;
        let passes = if repeat { usize::MAX } else { 1 };

        let mut lines: Vec<Line<'a>> = Vec::new();
        let mut line: Vec<&'a str> = Vec::new();
        let mut line_width = Px::ZERO;
        let mut height = Px::ZERO;

        for (word, width) in words
            .iter()
            .copied()
            .zip(widths.iter().copied())
            .cycle()
            .take(words.len().saturating_mul(passes))
        {
            if line.is_empty() {
                line.push(word);
                line_width = width;
                continue;
            }

            let candidate = line_width + space_width + width;
            if candidate <= max_width {
                line.push(word);
                line_width = candidate;
                continue;
            }

            tracing::trace!(words = line.len(), width = %line_width, "finished line");
            lines.push(Line::new(std::mem::take(&mut line)));
            height += self.style.line_height;
            if height >= max_height {
                tracing::debug!(
                    lines = lines.len(),
                    "caption reached the bottom of the target, dropping remaining words"
                );
                return lines;
            }

            line.push(word);
            line_width = width;
        }

        if !line.is_empty() {
            lines.push(Line::new(line));
        }

        lines
    }
}
