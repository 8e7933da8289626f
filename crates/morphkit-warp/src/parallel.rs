use rayon::prelude::*;

use morphkit_image::{Image, ImageDtype};

/// Apply a function to each output pixel with two sampling maps in parallel.
///
/// Each map holds one (x, y) sampling coordinate per output pixel in
/// row-major order, so both maps must have `rows * cols` entries. Rows of
/// the output are processed in parallel, pixels within a row sequentially.
pub fn par_iter_rows_resample_two<T, const C: usize>(
    dst: &mut Image<T, C>,
    map_left: &[[f64; 2]],
    map_right: &[[f64; 2]],
    f: impl Fn(&[f64; 2], &[f64; 2], &mut [T]) + Send + Sync,
) where
    T: ImageDtype,
{
    let cols = dst.cols();
    let dst_slice = dst.as_slice_mut();

    dst_slice
        .par_chunks_exact_mut(C * cols)
        .zip(map_left.par_chunks_exact(cols))
        .zip(map_right.par_chunks_exact(cols))
        .for_each(|((dst_chunk, left_chunk), right_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(left_chunk.iter().zip(right_chunk.iter()))
                .for_each(|(dst_pixel, (left, right))| {
                    f(left, right, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphkit_image::{ImageError, ImageSize};

    #[test]
    fn resample_two_writes_every_pixel() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;

        let map_left: Vec<[f64; 2]> = (0..6).map(|i| [i as f64, 0.0]).collect();
        let map_right: Vec<[f64; 2]> = (0..6).map(|i| [0.0, i as f64]).collect();

        par_iter_rows_resample_two(&mut dst, &map_left, &map_right, |left, right, pixel| {
            pixel[0] = (left[0] + right[1]) as f32;
        });

        assert_eq!(dst.as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        Ok(())
    }

    #[test]
    fn resample_two_rows_are_independent() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 3,
        };
        let mut dst = Image::<u8, 2>::from_size_val(size, 0)?;

        let map_left = vec![[1.0, 1.0]; 6];
        let map_right = vec![[2.0, 2.0]; 6];

        par_iter_rows_resample_two(&mut dst, &map_left, &map_right, |left, right, pixel| {
            pixel[0] = left[0] as u8;
            pixel[1] = right[0] as u8;
        });

        assert_eq!(dst.as_slice(), &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2]);

        Ok(())
    }
}
