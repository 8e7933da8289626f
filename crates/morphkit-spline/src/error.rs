/// An error type for the thin-plate-spline module.
#[derive(thiserror::Error, Debug)]
pub enum SplineError {
    /// Error when the spline is evaluated before it has been fitted.
    #[error("Spline has not been fitted yet")]
    NotFitted,

    /// Error when the source and target point sets differ in length.
    #[error("Source point count ({0}) does not match the target point count ({1})")]
    DimensionMismatch(usize, usize),

    /// Error when the interpolation system is singular or ill-conditioned.
    #[error("Interpolation system is singular or ill-conditioned")]
    SingularSystem,
}
