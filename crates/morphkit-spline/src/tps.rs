use faer::prelude::SpSolver;

use crate::error::SplineError;

/// Thin-plate-spline radial basis kernel, r^2 * ln(r).
///
/// The kernel limit at r = 0 is 0 and is handled explicitly since ln(0)
/// is undefined.
#[inline]
fn radial_basis(r: f64) -> f64 {
    if r == 0.0 {
        0.0
    } else {
        r * r * r.ln()
    }
}

/// Euclidean distance between two 2d points.
#[inline]
fn distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

/// Affine basis term [1, x, y] of a 2d point.
#[inline]
fn affine_term(p: &[f64; 2], k: usize) -> f64 {
    match k {
        0 => 1.0,
        1 => p[0],
        _ => p[1],
    }
}

/// Solved spline state, stored between fit and evaluation.
#[derive(Clone, Debug)]
struct FittedSpline {
    /// Control points the spline was fitted with, shape (n, 2).
    control_points: Vec<[f64; 2]>,
    /// Spline parameters with shape (n + 3, 2), the n radial weights
    /// stacked over the three affine terms per output coordinate.
    parameters: faer::Mat<f64>,
}

/// Thin-plate-spline mapping between two 2d point sets.
///
/// The spline is the minimum-bend-energy interpolation of a set of point
/// correspondences. Fitting solves a dense linear system of size n + 3 for
/// n control points; evaluation maps arbitrary points through the fitted
/// radial basis plus affine terms.
///
/// # Examples
///
/// ```
/// use morphkit_spline::ThinPlateSpline;
///
/// let source = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
/// let target = [[1.0, 2.0], [2.0, 2.0], [1.0, 3.0], [2.0, 3.0]];
///
/// let mut tps = ThinPlateSpline::new(0.0);
/// tps.fit(&source, &target).unwrap();
///
/// let warped = tps.transform(&[[0.5, 0.5]]).unwrap();
/// assert!((warped[0][0] - 1.5).abs() < 1e-6);
/// assert!((warped[0][1] - 2.5).abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct ThinPlateSpline {
    alpha: f64,
    fitted: Option<FittedSpline>,
}

impl ThinPlateSpline {
    /// Create a new unfitted spline with the given regularization.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Non-negative regularization weight. Zero interpolates the
    ///   control points exactly, larger values trade exactness for a smoother
    ///   deformation.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            fitted: None,
        }
    }

    /// The regularization weight the spline was created with.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Whether the spline has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Number of control points of the fitted spline, zero when unfitted.
    pub fn num_control_points(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.control_points.len())
    }

    /// Fit the spline to a set of point correspondences.
    ///
    /// Solves the augmented thin-plate system
    ///
    /// ```text
    /// | K + alpha * I  P |   | W |   | target |
    /// |                  | * |   | = |        |
    /// | P^T            0 |   | A |   | 0      |
    /// ```
    ///
    /// where `K[i][j]` is the radial basis of the distance between source
    /// points i and j and `P` holds the affine terms `[1, x, y]`. A
    /// successful fit replaces any previous solution entirely.
    ///
    /// # Arguments
    ///
    /// * `source` - The source 2d points with shape (n, 2).
    /// * `target` - The corresponding target 2d points with shape (n, 2).
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::DimensionMismatch`] when the two sets differ in
    /// length, and [`SplineError::SingularSystem`] when the system cannot be
    /// solved reliably, e.g. for collinear or duplicate control points or
    /// fewer than three points.
    pub fn fit(&mut self, source: &[[f64; 2]], target: &[[f64; 2]]) -> Result<(), SplineError> {
        if source.len() != target.len() {
            return Err(SplineError::DimensionMismatch(source.len(), target.len()));
        }
        if source.is_empty() {
            return Err(SplineError::SingularSystem);
        }

        let n = source.len();
        let dim = n + 3;

        // A = [[K + alpha * I, P], [P^T, 0]], targets stacked over three zero rows
        let mut a_mat = faer::Mat::<f64>::zeros(dim, dim);
        let mut y_mat = faer::Mat::<f64>::zeros(dim, 2);
        for i in 0..n {
            unsafe {
                for j in 0..n {
                    let k = radial_basis(distance(&source[i], &source[j]));
                    a_mat.write_unchecked(i, j, if i == j { k + self.alpha } else { k });
                }
                for k in 0..3 {
                    let term = affine_term(&source[i], k);
                    a_mat.write_unchecked(i, n + k, term);
                    a_mat.write_unchecked(n + k, i, term);
                }
                y_mat.write_unchecked(i, 0, target[i][0]);
                y_mat.write_unchecked(i, 1, target[i][1]);
            }
        }

        // reject degenerate configurations before solving
        let svd = a_mat.svd();
        let s_diag = svd.s_diagonal();
        let (s_max, s_min) = (s_diag[0], s_diag[dim - 1]);
        if s_min <= s_max * f64::EPSILON * dim as f64 {
            return Err(SplineError::SingularSystem);
        }

        log::debug!(
            "tps fit: n_control={}, alpha={}, cond={:.3e}",
            n,
            self.alpha,
            s_max / s_min
        );

        let parameters = a_mat.partial_piv_lu().solve(&y_mat);

        self.fitted = Some(FittedSpline {
            control_points: source.to_vec(),
            parameters,
        });

        Ok(())
    }

    /// Map a set of 2d points through the fitted spline.
    ///
    /// # Arguments
    ///
    /// * `points` - The 2d points to map, shape (m, 2).
    ///
    /// # Returns
    ///
    /// The mapped points with shape (m, 2).
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::NotFitted`] when called before a successful
    /// [`ThinPlateSpline::fit`].
    pub fn transform(&self, points: &[[f64; 2]]) -> Result<Vec<[f64; 2]>, SplineError> {
        let fitted = self.fitted.as_ref().ok_or(SplineError::NotFitted)?;

        let n = fitted.control_points.len();
        let wx = fitted.parameters.col(0);
        let wy = fitted.parameters.col(1);

        let mut output = Vec::with_capacity(points.len());
        for p in points {
            let mut q = [wx[n], wy[n]];
            for (i, c) in fitted.control_points.iter().enumerate() {
                let phi = radial_basis(distance(p, c));
                q[0] += phi * wx[i];
                q[1] += phi * wy[i];
            }
            q[0] += wx[n + 1] * p[0] + wx[n + 2] * p[1];
            q[1] += wy[n + 1] * p[0] + wy[n + 2] * p[1];
            output.push(q);
        }

        Ok(output)
    }
}
