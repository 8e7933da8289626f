#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::MorphError;

/// utilities for pixel interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

mod morph;
pub use morph::{morph, TPS_ALPHA};

pub use interpolation::InterpolationMode;
