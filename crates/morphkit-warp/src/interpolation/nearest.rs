use morphkit_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.round() as usize).clamp(0, cols - 1);
    let iv = (v.round() as usize).clamp(0, rows - 1);

    let base = (iv * cols + iu) * C;

    let src = unsafe { image.as_slice().get_unchecked(base..base + C) };

    let mut pixel = [0.0; C];
    for k in 0..C {
        pixel[k] = src[k].into();
    }

    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphkit_image::{ImageError, ImageSize};

    #[test]
    fn nearest_picks_closest_pixel() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 1.0, 2.0, 3.0],
        )?;

        assert_eq!(nearest_neighbor_interpolation(&image, 0.0, 0.0), [0.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 0.6, 0.0), [1.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 0.4, 0.6), [2.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 1.0, 1.0), [3.0]);

        Ok(())
    }

    #[test]
    fn nearest_clamps_to_border() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 20, 30, 40],
        )?;

        assert_eq!(nearest_neighbor_interpolation(&image, -3.0, 0.0), [10.0]);
        assert_eq!(nearest_neighbor_interpolation(&image, 5.0, 5.0), [40.0]);

        Ok(())
    }
}
