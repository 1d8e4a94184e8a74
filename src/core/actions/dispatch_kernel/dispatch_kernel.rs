use rayon::prelude::*;

use crate::core::actions::dispatch_kernel::ports::pixel_kernel::PixelKernel;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Dispatches a pixel kernel across the full grid on rayon's work-stealing
/// pool and retrieves the results in row-major order.
///
/// Rows are the unit of parallel work; pixels within a row run sequentially
/// on whichever worker claimed the row. The first failing pixel aborts the
/// dispatch and its error is propagated.
pub fn dispatch_kernel<K>(grid: GridSize, kernel: &K) -> Result<Vec<K::Success>, K::Failure>
where
    K: PixelKernel + Sync,
    K::Success: Send,
    K::Failure: Send,
{
    let width = grid.width() as i32;

    let rows: Result<Vec<Vec<K::Success>>, K::Failure> = (0..grid.height() as i32)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(grid.width() as usize);

            for x in 0..width {
                row.push(kernel.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessKernel {}

    impl PixelKernel for StubSuccessKernel {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x + 1000 * pixel.y) as u64)
        }
    }

    #[derive(Debug)]
    struct StubFailureKernel {}

    impl PixelKernel for StubFailureKernel {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    fn serial_reference(grid: GridSize, kernel: &StubSuccessKernel) -> Vec<u64> {
        let mut results = Vec::with_capacity(grid.pixel_count());

        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                results.push(kernel.compute(Point { x, y }).unwrap());
            }
        }

        results
    }

    #[test]
    fn test_dispatch_matches_serial_row_major_order() {
        let kernel = StubSuccessKernel {};
        let grid = GridSize::new(11, 9).unwrap();

        let parallel_results = dispatch_kernel(grid, &kernel).unwrap();

        assert_eq!(parallel_results, serial_reference(grid, &kernel));
    }

    #[test]
    fn test_dispatch_covers_every_pixel_exactly_once() {
        let kernel = StubSuccessKernel {};
        let grid = GridSize::new(101, 101).unwrap();

        let results = dispatch_kernel(grid, &kernel).unwrap();

        assert_eq!(results.len(), grid.pixel_count());
        assert_eq!(results, serial_reference(grid, &kernel));
    }

    #[test]
    fn test_dispatch_with_smallest_grid() {
        let kernel = StubSuccessKernel {};
        let grid = GridSize::new(1, 1).unwrap();

        let results = dispatch_kernel(grid, &kernel).unwrap();

        assert_eq!(results, vec![0]);
    }

    #[test]
    fn test_dispatch_propagates_kernel_failure() {
        let kernel = StubFailureKernel {};
        let grid = GridSize::new(4, 3).unwrap();

        let result = dispatch_kernel(grid, &kernel);

        assert_eq!(result, Err(StubError {}));
    }
}
