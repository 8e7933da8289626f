/// Create the grid of pixel coordinates for an output image.
///
/// # Arguments
///
/// * `rows` - The number of rows indicating the height of the grid
/// * `cols` - The number of columns indicating the width of the grid
///
/// # Returns
///
/// The (x, y) coordinate of every pixel in row-major order, length
/// `rows * cols`.
pub fn coordinate_grid(rows: usize, cols: usize) -> Vec<[f64; 2]> {
    let mut grid = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            grid.push([c as f64, r as f64]);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_grid_row_major() {
        let grid = coordinate_grid(2, 3);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0], [0.0, 0.0]);
        assert_eq!(grid[2], [2.0, 0.0]);
        assert_eq!(grid[3], [0.0, 1.0]);
        assert_eq!(grid[5], [2.0, 1.0]);
    }

    #[test]
    fn coordinate_grid_empty() {
        assert!(coordinate_grid(0, 3).is_empty());
        assert!(coordinate_grid(2, 0).is_empty());
    }
}
