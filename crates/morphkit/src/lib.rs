#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use morphkit_image as image;

#[doc(inline)]
pub use morphkit_spline as spline;

#[doc(inline)]
pub use morphkit_keyframe as keyframe;

#[doc(inline)]
pub use morphkit_warp as warp;
