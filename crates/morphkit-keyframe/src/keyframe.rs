use crate::error::KeyframeError;
use crate::interp;

/// Paired 2d landmark sets pinned to a point in time.
///
/// The left and right point sets always hold the same number of points, with
/// `points_left[i]` and `points_right[i]` marking the same feature in the two
/// images. Structural edits go through [`crate::KeyframeStore`], which keeps
/// the point count consistent across all keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub(crate) time: u32,
    pub(crate) points_left: Vec<[f64; 2]>,
    pub(crate) points_right: Vec<[f64; 2]>,
}

impl Keyframe {
    /// Create an empty keyframe at the given time.
    pub fn new(time: u32) -> Self {
        Self {
            time,
            points_left: Vec::new(),
            points_right: Vec::new(),
        }
    }

    /// Create a keyframe from existing point sets.
    ///
    /// # Errors
    ///
    /// Returns [`KeyframeError::MismatchedPointSets`] when the two sets
    /// differ in length.
    pub fn from_points(
        time: u32,
        points_left: Vec<[f64; 2]>,
        points_right: Vec<[f64; 2]>,
    ) -> Result<Self, KeyframeError> {
        if points_left.len() != points_right.len() {
            return Err(KeyframeError::MismatchedPointSets(
                points_left.len(),
                points_right.len(),
            ));
        }

        Ok(Self {
            time,
            points_left,
            points_right,
        })
    }

    /// The time of the keyframe.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// The landmark points in the left image.
    pub fn points_left(&self) -> &[[f64; 2]] {
        &self.points_left
    }

    /// The landmark points in the right image.
    pub fn points_right(&self) -> &[[f64; 2]] {
        &self.points_right
    }

    /// Number of landmark pairs in the keyframe.
    pub fn num_points(&self) -> usize {
        self.points_left.len()
    }

    /// Linearly interpolate between two keyframes.
    ///
    /// `amount = 0` returns `a` and `amount = 1` returns `b`. The time of the
    /// result is the rounded interpolation of the two times.
    ///
    /// # Panics
    ///
    /// Panics if the two keyframes hold different numbers of points.
    pub fn interpolate(a: &Keyframe, b: &Keyframe, amount: f64) -> Keyframe {
        Keyframe {
            time: interp::lerp(a.time as f64, b.time as f64, amount).round() as u32,
            points_left: interp::lerp_points(&a.points_left, &b.points_left, amount),
            points_right: interp::lerp_points(&a.points_right, &b.points_right, amount),
        }
    }

    pub(crate) fn add_point(&mut self, left: [f64; 2], right: [f64; 2]) {
        self.points_left.push(left);
        self.points_right.push(right);
    }

    pub(crate) fn update_point(
        &mut self,
        left: Option<[f64; 2]>,
        right: Option<[f64; 2]>,
        index: usize,
    ) -> Result<(), KeyframeError> {
        if index >= self.num_points() {
            return Err(KeyframeError::PointIndexOutOfBounds(
                index,
                self.num_points(),
            ));
        }
        if let Some(left) = left {
            self.points_left[index] = left;
        }
        if let Some(right) = right {
            self.points_right[index] = right;
        }
        Ok(())
    }

    pub(crate) fn remove_point(&mut self, index: usize) {
        self.points_left.remove(index);
        self.points_right.remove(index);
    }
}
