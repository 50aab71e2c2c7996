//! Caption layout: turning a string into positioned words.
//!
//! Layout happens in two steps, both parameterised by a [`CaptionStyle`](crate::CaptionStyle)
//! and a [`TextMeasure`] so they can run against a real [`Font`](crate::Font) or against
//! fixed metrics in tests:
//!
//! - [`LineWrapper`] greedily fills lines that fit a target width, stopping at the target
//!   height
//! - [`Justifier`] stretches the gaps between words so every line spans the full width
//!
//! # Example
//!
//! ```
//! use caption_overlay::layout::{FixedAdvance, Justifier, LineWrapper};
//! use caption_overlay::{CaptionStyle, Px};
//!
//! let style = CaptionStyle::default();
//! let metrics = FixedAdvance::new(Px(10.0), Px(30.0));
//!
//! let lines = LineWrapper::new(&metrics, &style).wrap(200, 100, "aa aa aa aa aa aa");
//! assert_eq!(lines.len(), 2);
//!
//! let words = Justifier::new(&metrics, &style).render(200, &lines);
//! assert_eq!(words[3].x, Px(180.0));
//! ```

mod justify;
mod measure;
mod wrap;

pub use justify::*;
pub use measure::*;
pub use wrap::*;
