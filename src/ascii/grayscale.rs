//! RGB to intensity conversion using ITU-R BT.601 luminance weights.

use image::DynamicImage;

/// Luminance of a single RGB pixel.
///
/// Integer form of `Y = 0.299*R + 0.587*G + 0.114*B`, with the coefficients
/// scaled by 1000 (299 + 587 + 114 = 1000). A gray pixel maps to its own value.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}

/// Convert an image to one intensity byte per pixel, row-major.
///
/// Any pixel format the `image` crate decodes is first normalised to 8-bit
/// RGB; alpha is discarded.
///
/// # Returns
/// A vector of `width * height` intensity values (0-255).
pub fn to_grayscale(img: &DynamicImage) -> Vec<u8> {
    let rgb = img.to_rgb8();
    let pixel_count = (rgb.width() as usize) * (rgb.height() as usize);
    let mut gray = Vec::with_capacity(pixel_count);

    for px in rgb.as_raw().chunks_exact(3) {
        gray.push(luminance(px[0], px[1], px[2]));
    }

    gray
}
