#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the keyframe module.
mod error;
pub use error::KeyframeError;

/// Linear interpolation helpers shared by the keyframe and blend queries.
pub mod interp;

mod keyframe;
pub use keyframe::Keyframe;

mod store;
pub use store::{BlendedPoints, KeyframeStore};
