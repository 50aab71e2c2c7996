mod canvas;
pub use canvas::*;

mod caption;
pub use caption::*;

mod colour;
pub use colour::*;

mod compositor;
pub use compositor::*;

mod font;
pub use font::*;

/// Utility functions and structures to wrap and justify caption text
pub mod layout;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export of the image crate, whose buffers the compositor consumes and returns
pub use image;
