//! Dimension calculation for fitting an image under a width limit.

/// Default correction factor for monospace glyphs.
///
/// Text cells are roughly twice as tall as they are wide, so one row of
/// characters covers more vertical space than one column covers horizontally.
/// Scaling the height by this factor keeps the silhouette from looking
/// stretched once printed.
pub const DEFAULT_CORRECTION_FACTOR: f64 = 0.55;

/// Default maximum output width in characters.
pub const DEFAULT_MAX_WIDTH: u32 = 1000;

/// Calculate the resized dimensions for an image wider than `max_width`.
///
/// The new height is `round(height / width * max_width * correction)`,
/// clamped to at least 1 so that very wide images still produce a row.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `max_width` - Maximum output width in characters
/// * `correction` - Glyph aspect correction (see [`DEFAULT_CORRECTION_FACTOR`])
///
/// # Returns
/// `Some((max_width, new_height))` when the image must shrink, or `None` when
/// it already fits. Images are never upscaled.
///
/// # Example
/// ```
/// use bitmap_message::ascii::{fit_to_width, DEFAULT_CORRECTION_FACTOR};
///
/// // 2000x1000 limited to 1000 columns: 0.5 * 1000 * 0.55 = 275 rows
/// assert_eq!(fit_to_width(2000, 1000, 1000, DEFAULT_CORRECTION_FACTOR), Some((1000, 275)));
/// assert_eq!(fit_to_width(800, 600, 1000, DEFAULT_CORRECTION_FACTOR), None);
/// ```
pub fn fit_to_width(
    img_width: u32,
    img_height: u32,
    max_width: u32,
    correction: f64,
) -> Option<(u32, u32)> {
    if img_width == 0 || img_width <= max_width {
        return None;
    }

    let aspect = img_height as f64 / img_width as f64;
    let new_height = (aspect * max_width as f64 * correction).round() as u32;

    Some((max_width, new_height.max(1)))
}
