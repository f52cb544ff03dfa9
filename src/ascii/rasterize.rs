//! Rasterizer: decode an image, fit it under the width limit, threshold it.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use super::bitmap::Bitmap;
use super::dimensions::{fit_to_width, DEFAULT_CORRECTION_FACTOR};
use super::grayscale::to_grayscale;
use super::resample::{resize, Filter};
use crate::error::{Error, Result};

/// Where the image bytes come from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A file on disk; the format is guessed from its contents.
    Path(PathBuf),
    /// An in-memory encoded image (PNG, JPEG, BMP, ...).
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Name used in error messages and logs.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(p) => p.display().to_string(),
            ImageSource::Bytes(b) => format!("<{} bytes in memory>", b.len()),
        }
    }
}

impl From<&Path> for ImageSource {
    fn from(p: &Path) -> Self {
        ImageSource::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(p: PathBuf) -> Self {
        ImageSource::Path(p)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(b: Vec<u8>) -> Self {
        ImageSource::Bytes(b)
    }
}

/// Validated rasterization settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    threshold: u8,
    max_width: u32,
    correction_factor: f64,
    filter: Filter,
}

impl RasterOptions {
    /// Validate a threshold (0-255) and a maximum width (> 0).
    ///
    /// The correction factor defaults to [`DEFAULT_CORRECTION_FACTOR`] and the
    /// filter to Lanczos3.
    pub fn new(threshold: i64, max_width: i64) -> Result<Self> {
        let threshold = u8::try_from(threshold).map_err(|_| {
            Error::invalid(format!(
                "threshold must be between 0 and 255, got {}",
                threshold
            ))
        })?;
        if max_width <= 0 {
            return Err(Error::invalid(format!(
                "max width must be greater than 0, got {}",
                max_width
            )));
        }
        let max_width = u32::try_from(max_width).map_err(|_| {
            Error::invalid(format!("max width {} is too large", max_width))
        })?;

        Ok(Self {
            threshold,
            max_width,
            correction_factor: DEFAULT_CORRECTION_FACTOR,
            filter: Filter::default(),
        })
    }

    /// Override the glyph aspect correction. Must be finite and positive.
    pub fn with_correction_factor(mut self, factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::invalid(format!(
                "correction factor must be a positive number, got {}",
                factor
            )));
        }
        self.correction_factor = factor;
        Ok(self)
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn correction_factor(&self) -> f64 {
        self.correction_factor
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }
}

/// Decode an image from a path or an in-memory buffer.
///
/// The format is sniffed from the leading bytes; a file's extension is only
/// consulted when the content is not recognised.
pub fn load_image(source: &ImageSource) -> Result<DynamicImage> {
    let decoded = match source {
        ImageSource::Path(path) => decode_file(path),
        ImageSource::Bytes(bytes) => image::load_from_memory(bytes),
    };

    decoded.map_err(|e| Error::ImageLoad {
        source_name: source.describe(),
        source: e,
    })
}

fn decode_file(path: &Path) -> image::ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Rasterize an image into a light/dark bitmap.
///
/// Inputs are validated before the image is touched, so an out-of-range
/// threshold or width fails with `InvalidInput` even for a missing file.
pub fn rasterize(source: &ImageSource, threshold: i64, max_width: i64) -> Result<Bitmap> {
    let options = RasterOptions::new(threshold, max_width)?;
    rasterize_with(source, &options)
}

/// Load `source` and rasterize it with pre-validated options.
pub fn rasterize_with(source: &ImageSource, options: &RasterOptions) -> Result<Bitmap> {
    let img = load_image(source)?;
    log::info!(
        "Loaded {} ({}x{})",
        source.describe(),
        img.width(),
        img.height()
    );
    Ok(rasterize_image(&img, options))
}

/// Rasterize an already-decoded image.
///
/// Pipeline: fit to width (shrink only) -> intensity -> threshold -> trim.
pub fn rasterize_image(img: &DynamicImage, options: &RasterOptions) -> Bitmap {
    let fitted = fit_to_width(
        img.width(),
        img.height(),
        options.max_width,
        options.correction_factor,
    );

    let resized;
    let working = match fitted {
        Some((width, height)) => {
            resized = resize(img, width, height, options.filter);
            &resized
        }
        None => {
            log::debug!(
                "Image width {} within limit {}, no resize",
                img.width(),
                options.max_width
            );
            img
        }
    };

    let gray = to_grayscale(working);
    let bitmap = Bitmap::from_intensities(&gray, working.width() as usize, options.threshold);

    log::debug!(
        "Bitmap: {} rows, {} light cells (threshold {})",
        bitmap.height(),
        bitmap.light_count(),
        options.threshold
    );

    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::bitmap::Cell;
    use image::{GrayImage, Luma};

    fn gray_image(width: u32, height: u32, values: &[u8]) -> DynamicImage {
        let img = GrayImage::from_fn(width, height, |x, y| {
            Luma([values[(y * width + x) as usize]])
        });
        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn test_options_accept_full_range() {
        assert_eq!(RasterOptions::new(0, 1).unwrap().threshold(), 0);
        assert_eq!(RasterOptions::new(255, 1).unwrap().threshold(), 255);
    }

    #[test]
    fn test_options_reject_out_of_range_threshold() {
        assert!(matches!(RasterOptions::new(256, 10), Err(Error::InvalidInput(_))));
        assert!(matches!(RasterOptions::new(-1, 10), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_options_reject_non_positive_width() {
        assert!(matches!(RasterOptions::new(100, 0), Err(Error::InvalidInput(_))));
        assert!(matches!(RasterOptions::new(100, -5), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_options_reject_bad_correction_factor() {
        let opts = RasterOptions::new(100, 10).unwrap();
        assert!(opts.with_correction_factor(0.0).is_err());
        assert!(opts.with_correction_factor(-0.5).is_err());
        assert!(opts.with_correction_factor(f64::NAN).is_err());
        assert_eq!(opts.with_correction_factor(1.0).unwrap().correction_factor(), 1.0);
    }

    #[test]
    fn test_two_pixel_scenario() {
        let img = gray_image(2, 1, &[10, 200]);
        let opts = RasterOptions::new(100, 1000).unwrap();
        let bitmap = rasterize_image(&img, &opts);
        assert_eq!(bitmap.rows(), &[vec![Cell::Dark, Cell::Light]]);
    }

    #[test]
    fn test_threshold_boundary_pixels() {
        let img = gray_image(3, 1, &[99, 100, 101]);
        let opts = RasterOptions::new(100, 1000).unwrap();
        let bitmap = rasterize_image(&img, &opts);
        assert_eq!(bitmap.rows()[0], vec![Cell::Dark, Cell::Light, Cell::Light]);
    }

    #[test]
    fn test_no_upscale_keeps_height() {
        let img = gray_image(4, 7, &[255; 28]);
        let opts = RasterOptions::new(128, 1000).unwrap();
        let bitmap = rasterize_image(&img, &opts);
        assert_eq!(bitmap.height(), 7);
        assert!(bitmap.rows().iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_wide_image_is_downscaled_with_correction() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(200, 100, Luma([255])));
        let opts = RasterOptions::new(128, 50).unwrap();
        let bitmap = rasterize_image(&img, &opts);
        // 0.5 * 50 * 0.55 = 13.75 -> 14
        assert_eq!(bitmap.height(), 14);
        assert!(bitmap.rows().iter().all(|r| r.len() == 50));
    }

    #[test]
    fn test_source_image_not_mutated() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(30, 30, Luma([0])));
        let opts = RasterOptions::new(1, 10).unwrap();
        let _ = rasterize_image(&img, &opts);
        assert_eq!((img.width(), img.height()), (30, 30));
    }

    #[test]
    fn test_invalid_input_checked_before_load() {
        let missing = ImageSource::Path(PathBuf::from("/definitely/not/here.png"));
        assert!(matches!(rasterize(&missing, 999, 10), Err(Error::InvalidInput(_))));
        assert!(matches!(rasterize(&missing, 10, 0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_garbage_bytes_fail_to_load() {
        let source = ImageSource::Bytes(b"definitely not an image".to_vec());
        assert!(matches!(rasterize(&source, 128, 10), Err(Error::ImageLoad { .. })));
    }

    #[test]
    fn test_describe_source() {
        assert_eq!(ImageSource::Bytes(vec![0; 3]).describe(), "<3 bytes in memory>");
        assert_eq!(ImageSource::from(PathBuf::from("a.png")).describe(), "a.png");
    }
}
