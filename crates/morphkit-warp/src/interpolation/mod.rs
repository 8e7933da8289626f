//! Pixel interpolation kernels for image resampling.
//!
//! The kernels read a single pixel out of a source image at a fractional
//! coordinate and are shared by every resampling operation in this crate.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: fastest, uses the nearest pixel value (no interpolation)
//! - **Bilinear**: smooth linear interpolation between adjacent pixels

mod bilinear;

/// Coordinate grid generation for image warping.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;

pub use interpolate::interpolate_pixel;
pub use interpolate::InterpolationMode;
