use crate::error::KeyframeError;
use crate::interp;
use crate::keyframe::Keyframe;

/// Point sets produced by [`KeyframeStore::query_blend`].
#[derive(Clone, Debug, PartialEq)]
pub struct BlendedPoints {
    /// Landmark positions in the left image at the queried time.
    pub left: Vec<[f64; 2]>,
    /// Landmark positions in the right image at the queried time.
    pub right: Vec<[f64; 2]>,
    /// Positions blended between left and right by the morph amount.
    pub blended: Vec<[f64; 2]>,
}

/// Ordered collection of keyframes with cascading structural edits.
///
/// Keyframes are kept sorted by strictly increasing time. Every keyframe
/// holds the same number of landmark pairs; adding or removing a landmark
/// is replayed across all keyframes so the index of a landmark means the
/// same thing at every time. Mutations validate before touching any
/// keyframe, so a failed operation leaves the store unchanged.
///
/// # Examples
///
/// ```
/// use morphkit_keyframe::KeyframeStore;
///
/// let mut store = KeyframeStore::new();
/// store.add_point([10.0, 10.0], [20.0, 10.0], 0).unwrap();
///
/// let points = store.query_blend(0.5, 0).unwrap();
/// assert_eq!(points.blended[0], [15.0, 10.0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyframeStore {
    keyframes: Vec<Keyframe>,
}

impl KeyframeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keyframes.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Whether the store holds no keyframes.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Number of landmark pairs held by every keyframe.
    pub fn num_points(&self) -> usize {
        self.keyframes.first().map_or(0, |k| k.num_points())
    }

    /// The stored keyframes, ordered by time.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// The keyframe times in ascending order.
    pub fn times(&self) -> Vec<u32> {
        self.keyframes.iter().map(|k| k.time).collect()
    }

    /// Index of the first keyframe whose time is at or after the given time.
    ///
    /// Equals [`KeyframeStore::len`] when the time is past the last
    /// keyframe. For keyframe times `[0, 2, 10]`, queries 0, 1, 3, 5 and 10
    /// return 0, 1, 2, 2 and 2.
    pub fn nearest_at_or_after(&self, time: u32) -> usize {
        match self.keyframes.binary_search_by_key(&time, |k| k.time) {
            Ok(idx) | Err(idx) => idx,
        }
    }

    /// Index of the last keyframe strictly before the given time, or `None`
    /// when the time precedes every stored keyframe.
    pub fn nearest_before(&self, time: u32) -> Option<usize> {
        self.nearest_at_or_after(time).checked_sub(1)
    }

    /// The landmark state at an arbitrary time.
    ///
    /// A time matching a stored keyframe returns that keyframe's data. A
    /// time between two keyframes returns a synthetic keyframe carrying the
    /// requested time and the elementwise interpolation of the bracketing
    /// pair. With a single stored keyframe the time argument is ignored and
    /// that keyframe is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`KeyframeError::EmptyStore`] on an empty store and
    /// [`KeyframeError::OutOfRange`] when the time falls outside the span
    /// of a multi-keyframe store. Interpolation never extrapolates.
    pub fn interpolated(&self, time: u32) -> Result<Keyframe, KeyframeError> {
        let first = self.keyframes.first().ok_or(KeyframeError::EmptyStore)?;
        if self.keyframes.len() == 1 {
            return Ok(first.clone());
        }

        let (first, last) = (first.time, self.keyframes[self.keyframes.len() - 1].time);
        if time < first || time > last {
            return Err(KeyframeError::OutOfRange { time, first, last });
        }

        let idx = self.nearest_at_or_after(time);
        let after = &self.keyframes[idx];
        if after.time == time {
            return Ok(after.clone());
        }

        // time > first here, so a bracketing keyframe exists below idx
        let before = &self.keyframes[idx - 1];
        let amount = (time - before.time) as f64 / (after.time - before.time) as f64;

        // the synthetic keyframe carries the requested time exactly
        let mut keyframe = Keyframe::interpolate(before, after, amount);
        keyframe.time = time;
        Ok(keyframe)
    }

    /// Add a new landmark pair at the given time.
    ///
    /// The pair is appended as the last landmark index. When no keyframe
    /// exists at exactly the given time, one is first synthesized via
    /// [`KeyframeStore::interpolated`] and inserted in sorted position, so
    /// it carries the interpolated positions of all prior landmarks. The new
    /// pair is then appended verbatim to every other keyframe to keep the
    /// point count equal everywhere; its per-keyframe motion is established
    /// later through [`KeyframeStore::update_point`].
    ///
    /// # Returns
    ///
    /// The index of the new landmark.
    ///
    /// # Errors
    ///
    /// Returns [`KeyframeError::OutOfRange`] when the time falls outside the
    /// span of a multi-keyframe store. The store is left unchanged on error.
    pub fn add_point(
        &mut self,
        left: [f64; 2],
        right: [f64; 2],
        time: u32,
    ) -> Result<usize, KeyframeError> {
        let insertion_idx = self.nearest_at_or_after(time);

        if self.keyframes.is_empty() {
            let mut keyframe = Keyframe::new(time);
            keyframe.add_point(left, right);
            self.keyframes.push(keyframe);
        } else if self
            .keyframes
            .get(insertion_idx)
            .is_some_and(|k| k.time == time)
        {
            self.keyframes[insertion_idx].add_point(left, right);
        } else {
            let mut keyframe = self.interpolated(time)?;
            keyframe.time = time;
            keyframe.add_point(left, right);
            self.keyframes.insert(insertion_idx, keyframe);
        }

        // replay the same pair across every other keyframe
        for (idx, keyframe) in self.keyframes.iter_mut().enumerate() {
            if idx != insertion_idx {
                keyframe.add_point(left, right);
            }
        }

        let index = self.keyframes[insertion_idx].num_points() - 1;
        log::debug!(
            "add point: time={}, index={}, keyframes={}",
            time,
            index,
            self.keyframes.len()
        );

        Ok(index)
    }

    /// Overwrite the coordinates of a landmark at an exact keyframe time.
    ///
    /// Either side may be `None` to update only one image's landmark. Only
    /// the addressed keyframe is modified.
    ///
    /// # Errors
    ///
    /// Returns [`KeyframeError::NoSuchKeyframe`] when no keyframe exists at
    /// exactly the given time (insert a point there first), and
    /// [`KeyframeError::PointIndexOutOfBounds`] when the landmark index is
    /// out of bounds.
    pub fn update_point(
        &mut self,
        left: Option<[f64; 2]>,
        right: Option<[f64; 2]>,
        time: u32,
        index: usize,
    ) -> Result<(), KeyframeError> {
        let idx = self.nearest_at_or_after(time);
        let keyframe = self
            .keyframes
            .get_mut(idx)
            .filter(|k| k.time == time)
            .ok_or(KeyframeError::NoSuchKeyframe(time))?;

        keyframe.update_point(left, right, index)
    }

    /// Remove the landmark at the given index from every keyframe.
    ///
    /// Index alignment of the remaining landmarks is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`KeyframeError::PointIndexOutOfBounds`] when the index is
    /// out of bounds; no keyframe is modified in that case.
    pub fn remove_point(&mut self, index: usize) -> Result<(), KeyframeError> {
        let num_points = self.num_points();
        if index >= num_points {
            return Err(KeyframeError::PointIndexOutOfBounds(index, num_points));
        }

        for keyframe in &mut self.keyframes {
            keyframe.remove_point(index);
        }

        log::debug!(
            "remove point: index={}, keyframes={}",
            index,
            self.keyframes.len()
        );

        Ok(())
    }

    /// The landmark triple driving a morph at the given time.
    ///
    /// Returns the left and right point sets from
    /// [`KeyframeStore::interpolated`] together with their elementwise blend,
    /// `lerp(left, right, morph_amount)`. A morph amount of 0 places the
    /// blended points on the left landmarks, 1 on the right.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`KeyframeStore::interpolated`].
    pub fn query_blend(
        &self,
        morph_amount: f64,
        time: u32,
    ) -> Result<BlendedPoints, KeyframeError> {
        let keyframe = self.interpolated(time)?;
        let blended = interp::lerp_points(
            &keyframe.points_left,
            &keyframe.points_right,
            morph_amount,
        );

        Ok(BlendedPoints {
            left: keyframe.points_left,
            right: keyframe.points_right,
            blended,
        })
    }
}
