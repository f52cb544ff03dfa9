//! CLI enum types for resampling options.

use clap::ValueEnum;

use bitmap_message::ascii::Filter;

/// Resampling filter used when the image is shrunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResampleFilter> for Filter {
    fn from(f: ResampleFilter) -> Self {
        match f {
            ResampleFilter::Nearest => Filter::Nearest,
            ResampleFilter::Triangle => Filter::Triangle,
            ResampleFilter::CatmullRom => Filter::CatmullRom,
            ResampleFilter::Gaussian => Filter::Gaussian,
            ResampleFilter::Lanczos3 => Filter::Lanczos3,
        }
    }
}
