/// An error type for the keyframe module.
#[derive(thiserror::Error, Debug)]
pub enum KeyframeError {
    /// Error when no keyframe exists at the exact requested time.
    #[error("No keyframe exists at time {0}")]
    NoSuchKeyframe(u32),

    /// Error when the requested time lies outside the stored keyframe span.
    #[error("Time {time} is outside the keyframe span [{first}, {last}]")]
    OutOfRange {
        /// The requested time.
        time: u32,
        /// Time of the first stored keyframe.
        first: u32,
        /// Time of the last stored keyframe.
        last: u32,
    },

    /// Error when the store holds no keyframes.
    #[error("The keyframe store is empty")]
    EmptyStore,

    /// Error when the landmark index is out of bounds.
    #[error("Point index ({0}) is out of bounds ({1})")]
    PointIndexOutOfBounds(usize, usize),

    /// Error when the left and right point sets differ in length.
    #[error("Left point count ({0}) does not match the right point count ({1})")]
    MismatchedPointSets(usize, usize),
}
