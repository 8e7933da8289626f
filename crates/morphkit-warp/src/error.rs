/// An error type for the warp and morph operations.
#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    /// Error when the image channel count is not supported.
    #[error("Channel count ({0}) is not supported, expected 1, 3 or 4")]
    InvalidChannelFormat(usize),

    /// Error when the blend ratio is outside of the valid range.
    #[error("Blend ratio ({0}) must be in the range [0, 1]")]
    InvalidBlendRatio(f64),

    /// Error coming from the spline fits.
    #[error(transparent)]
    SplineError(#[from] morphkit_spline::SplineError),

    /// Error coming from the image container.
    #[error(transparent)]
    ImageError(#[from] morphkit_image::ImageError),
}
