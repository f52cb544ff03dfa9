//! Resampling of images that exceed the width limit.

use image::imageops::FilterType;
use image::DynamicImage;
use serde::Deserialize;

/// Resampling filter used when an image is shrunk to fit the width limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    /// Nearest neighbour, blocky but keeps hard edges
    Nearest,
    /// Linear (tent) filter
    Triangle,
    /// Cubic filter
    CatmullRom,
    /// Gaussian blur filter
    Gaussian,
    /// Lanczos with window 3, best quality for downscaling
    #[default]
    Lanczos3,
}

impl Filter {
    /// Get a human-readable name for the filter.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Nearest => "nearest",
            Filter::Triangle => "triangle",
            Filter::CatmullRom => "catmull-rom",
            Filter::Gaussian => "gaussian",
            Filter::Lanczos3 => "lanczos3",
        }
    }
}

impl From<Filter> for FilterType {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exactly `width` x `height` with the given filter.
///
/// Returns a new image; the source is left untouched.
pub fn resize(img: &DynamicImage, width: u32, height: u32, filter: Filter) -> DynamicImage {
    log::debug!(
        "Resizing image {}x{} -> {}x{} ({})",
        img.width(),
        img.height(),
        width,
        height,
        filter.name()
    );
    img.resize_exact(width, height, filter.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn create_test_image(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
    }

    #[test]
    fn test_default_filter_is_lanczos3() {
        assert_eq!(Filter::default(), Filter::Lanczos3);
    }

    #[test]
    fn test_resize_exact_dimensions() {
        let img = create_test_image(800, 600, 128);
        let out = resize(&img, 100, 41, Filter::Lanczos3);
        assert_eq!((out.width(), out.height()), (100, 41));
    }

    #[test]
    fn test_resize_leaves_source_untouched() {
        let img = create_test_image(50, 20, 10);
        let _ = resize(&img, 10, 3, Filter::Triangle);
        assert_eq!((img.width(), img.height()), (50, 20));
    }

    #[test]
    fn test_resize_uniform_image_stays_uniform() {
        let img = create_test_image(64, 64, 200);
        let out = resize(&img, 16, 9, Filter::Nearest).to_luma8();
        assert!(out.pixels().all(|p| p.0[0] == 200));
    }

    #[test]
    fn test_filter_names_match_config_spelling() {
        let parsed: Filter = toml::Value::String("catmull-rom".into()).try_into().unwrap();
        assert_eq!(parsed, Filter::CatmullRom);
        assert_eq!(parsed.name(), "catmull-rom");
    }
}
