use morphkit_image::{Image, ImageDtype, ImageError};
use morphkit_spline::ThinPlateSpline;

use crate::error::MorphError;
use crate::interpolation::{grid::coordinate_grid, interpolate_pixel, InterpolationMode};
use crate::parallel;

/// Regularization weight for the two landmark warps.
///
/// Hand-placed landmarks carry a little positional noise, so the warps give
/// up exact collocation for a smoother deformation.
pub const TPS_ALPHA: f64 = 0.1;

/// Warp two source images onto a shared landmark grid and blend them.
///
/// Fits one thin-plate-spline warp per source, mapping the virtual landmarks
/// onto that source's landmarks. Every output pixel coordinate is sent
/// through both warps, each source is sampled at the resulting position and
/// the two samples are blended per channel in floating point. Sampling
/// positions are clamped to each source's valid pixel range, so landmarks
/// near the border never cause out-of-bounds reads.
///
/// The three landmark sets must have the same length and are consumed
/// pairwise, landmark i of the virtual set maps to landmark i of each
/// source set.
///
/// # Arguments
///
/// * `src_left` - The left source image.
/// * `src_right` - The right source image.
/// * `dst` - The output image, of any size.
/// * `points_left` - Landmark positions in the left source image.
/// * `points_right` - Landmark positions in the right source image.
/// * `points_virtual` - Landmark positions in the output image, the common
///   domain of both warps.
/// * `blend` - Blend ratio in `[0, 1]`, 0 shows only the warped left image
///   and 1 only the warped right image.
/// * `interpolation` - The interpolation mode for sampling the sources.
///
/// # Errors
///
/// Returns [`MorphError::InvalidChannelFormat`] for channel counts other
/// than 1, 3 or 4, [`MorphError::InvalidBlendRatio`] when `blend` is
/// outside `[0, 1]`, and [`ImageError::InvalidImageSize`] when a source
/// image has no pixels. Errors of the two spline fits are propagated, e.g.
/// mismatched landmark counts or degenerate landmark placements.
///
/// # Examples
///
/// ```
/// use morphkit_image::{Image, ImageSize};
/// use morphkit_warp::{morph, InterpolationMode};
///
/// let size = ImageSize { width: 4, height: 4 };
/// let left = Image::<u8, 1>::from_size_val(size, 50).unwrap();
/// let right = Image::<u8, 1>::from_size_val(size, 150).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// // landmarks pin the four corners in place
/// let corners = [[0.0, 0.0], [3.0, 0.0], [0.0, 3.0], [3.0, 3.0]];
///
/// morph(
///     &left,
///     &right,
///     &mut dst,
///     &corners,
///     &corners,
///     &corners,
///     0.5,
///     InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert!(dst.as_slice().iter().all(|&x| x == 100));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn morph<T, const C: usize>(
    src_left: &Image<T, C>,
    src_right: &Image<T, C>,
    dst: &mut Image<T, C>,
    points_left: &[[f64; 2]],
    points_right: &[[f64; 2]],
    points_virtual: &[[f64; 2]],
    blend: f64,
    interpolation: InterpolationMode,
) -> Result<(), MorphError>
where
    T: ImageDtype,
{
    if !matches!(C, 1 | 3 | 4) {
        return Err(MorphError::InvalidChannelFormat(C));
    }

    if !(0.0..=1.0).contains(&blend) {
        return Err(MorphError::InvalidBlendRatio(blend));
    }

    if src_left.as_slice().is_empty() {
        return Err(MorphError::ImageError(ImageError::InvalidImageSize(
            src_left.width(),
            src_left.height(),
        )));
    }

    if src_right.as_slice().is_empty() {
        return Err(MorphError::ImageError(ImageError::InvalidImageSize(
            src_right.width(),
            src_right.height(),
        )));
    }

    let now = std::time::Instant::now();

    // fit one warp per source, sending output coordinates into that source
    let mut warp_left = ThinPlateSpline::new(TPS_ALPHA);
    warp_left.fit(points_virtual, points_left)?;

    let mut warp_right = ThinPlateSpline::new(TPS_ALPHA);
    warp_right.fit(points_virtual, points_right)?;

    if dst.as_slice().is_empty() {
        return Ok(());
    }

    // transform the full output grid through both warps in one batch each
    let grid = coordinate_grid(dst.rows(), dst.cols());
    let map_left = warp_left.transform(&grid)?;
    let map_right = warp_right.transform(&grid)?;

    let (left_max_u, left_max_v) = (
        (src_left.cols() - 1) as f64,
        (src_left.rows() - 1) as f64,
    );
    let (right_max_u, right_max_v) = (
        (src_right.cols() - 1) as f64,
        (src_right.rows() - 1) as f64,
    );

    let blend = blend as f32;

    parallel::par_iter_rows_resample_two(dst, &map_left, &map_right, |left, right, dst_pixel| {
        let (u_left, v_left) = (
            left[0].clamp(0.0, left_max_u) as f32,
            left[1].clamp(0.0, left_max_v) as f32,
        );
        let (u_right, v_right) = (
            right[0].clamp(0.0, right_max_u) as f32,
            right[1].clamp(0.0, right_max_v) as f32,
        );

        let pixel_left = interpolate_pixel(src_left, u_left, v_left, interpolation);
        let pixel_right = interpolate_pixel(src_right, u_right, v_right, interpolation);

        dst_pixel.iter_mut().enumerate().for_each(|(k, pixel)| {
            *pixel = T::from_f32(pixel_left[k] * (1.0 - blend) + pixel_right[k] * blend);
        });
    });

    log::debug!(
        "morph: {}x{} output, {} landmarks, elapsed: {:?}",
        dst.cols(),
        dst.rows(),
        points_virtual.len(),
        now.elapsed()
    );

    Ok(())
}
