//! Image to message-art pipeline.
//!
//! Converting a picture into text art happens in two stages:
//!
//! 1. **Rasterizer** - decode, shrink to the width limit with a glyph aspect
//!    correction, convert to BT.601 luminance and threshold into a [`Bitmap`]
//! 2. **Compositor** - walk the bitmap and replace every light cell with the
//!    next character of a cyclically repeated [`Message`]
//!
//! ```
//! use bitmap_message::ascii::{compose, Bitmap};
//!
//! let bitmap: Bitmap = " **\n* *".parse().unwrap();
//! let art = compose(&bitmap, "abc").unwrap();
//! assert_eq!(art.to_string(), " ab\nc a");
//! ```

mod bitmap;
mod compose;
mod dimensions;
mod grayscale;
mod rasterize;
mod resample;

pub use bitmap::{Bitmap, Cell, DARK_CHAR, LIGHT_CHAR};
pub use compose::{compose, compose_message, AsciiArt, Message};
pub use dimensions::{fit_to_width, DEFAULT_CORRECTION_FACTOR, DEFAULT_MAX_WIDTH};
pub use grayscale::{luminance, to_grayscale};
pub use rasterize::{load_image, rasterize, rasterize_image, rasterize_with, ImageSource, RasterOptions};
pub use resample::{resize, Filter};
