//! bitmap-message library crate.
//!
//! Turns a raster image into text art: the image is thresholded into a
//! light/dark bitmap and the light cells are filled with a repeating message.
//! See [`ascii`] for the pipeline.

pub mod ascii;
pub mod config;
pub mod error;

pub use error::{Error, Result};
