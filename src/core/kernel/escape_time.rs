use crate::core::actions::dispatch_kernel::ports::pixel_kernel::PixelKernel;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::kernel::precision::Precision;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeTimeKernelConstructorError {
    ZeroMaxIterations,
}

impl fmt::Display for EscapeTimeKernelConstructorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EscapeTimeKernelConstructorError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeTimeKernelError {
    PixelOutsideGrid { pixel: Point, grid: GridSize },
}

impl fmt::Display for EscapeTimeKernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideGrid { pixel, grid } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} grid",
                    pixel.x,
                    pixel.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for EscapeTimeKernelError {}

/// Escape-time program for the Mandelbrot recurrence `z ← z² + c`.
///
/// Each pixel maps to a point `c` of the complex plane through the viewport:
/// the visible region spans 3.5 plane units horizontally and 2.0 vertically
/// at zoom 1.0, centred on the viewport offset. The kernel counts recurrence
/// steps until `|z|² > 4.0` or the iteration cap is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeKernel {
    grid: GridSize,
    viewport: Viewport,
    max_iterations: u32,
    precision: Precision,
}

impl EscapeTimeKernel {
    pub fn new(
        grid: GridSize,
        viewport: Viewport,
        max_iterations: u32,
        precision: Precision,
    ) -> Result<Self, EscapeTimeKernelConstructorError> {
        if max_iterations == 0 {
            return Err(EscapeTimeKernelConstructorError::ZeroMaxIterations);
        }

        Ok(Self { grid, viewport, max_iterations, precision })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_time_single(&self, pixel: Point) -> u32 {
        let width = self.grid.width();
        let height = self.grid.height();
        let zoom = self.viewport.zoom() as f32;

        let scale_x = 3.5 / width as f32 / zoom;
        let scale_y = 2.0 / height as f32 / zoom;

        let cx = (pixel.x - (width / 2) as i32) as f32 * scale_x + self.viewport.offset_x() as f32;
        let cy = (pixel.y - (height / 2) as i32) as f32 * scale_y + self.viewport.offset_y() as f32;

        escape_time_f32(cx, cy, self.max_iterations)
    }

    fn escape_time_double(&self, pixel: Point) -> u32 {
        let width = self.grid.width();
        let height = self.grid.height();
        let zoom = self.viewport.zoom();

        let scale_x = 3.5 / f64::from(width) / zoom;
        let scale_y = 2.0 / f64::from(height) / zoom;

        let cx = f64::from(pixel.x - (width / 2) as i32) * scale_x + self.viewport.offset_x();
        let cy = f64::from(pixel.y - (height / 2) as i32) * scale_y + self.viewport.offset_y();

        escape_time_f64(cx, cy, self.max_iterations)
    }
}

impl PixelKernel for EscapeTimeKernel {
    type Success = u32;
    type Failure = EscapeTimeKernelError;

    fn compute(&self, pixel: Point) -> Result<u32, EscapeTimeKernelError> {
        if !self.grid.contains(pixel) {
            return Err(EscapeTimeKernelError::PixelOutsideGrid { pixel, grid: self.grid });
        }

        Ok(match self.precision {
            Precision::Single => self.escape_time_single(pixel),
            Precision::Double => self.escape_time_double(pixel),
        })
    }
}

fn escape_time_f32(cx: f32, cy: f32, max_iterations: u32) -> u32 {
    let mut zx = 0.0_f32;
    let mut zy = 0.0_f32;
    let mut iterations = 0;

    while iterations < max_iterations {
        let zx2 = zx * zx;
        let zy2 = zy * zy;

        if zx2 + zy2 > 4.0 {
            break;
        }

        zy = 2.0 * zx * zy + cy;
        zx = zx2 - zy2 + cx;
        iterations += 1;
    }

    iterations
}

fn escape_time_f64(cx: f64, cy: f64, max_iterations: u32) -> u32 {
    let mut zx = 0.0_f64;
    let mut zy = 0.0_f64;
    let mut iterations = 0;

    while iterations < max_iterations {
        let zx2 = zx * zx;
        let zy2 = zy * zy;

        if zx2 + zy2 > 4.0 {
            break;
        }

        zy = 2.0 * zx * zy + cy;
        zx = zx2 - zy2 + cx;
        iterations += 1;
    }

    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centred_kernel(offset_x: f64, offset_y: f64, precision: Precision) -> EscapeTimeKernel {
        let grid = GridSize::new(80, 60).unwrap();
        let viewport = Viewport::new(offset_x, offset_y, 1.0).unwrap();

        EscapeTimeKernel::new(grid, viewport, 800, precision).unwrap()
    }

    #[test]
    fn test_constructor_rejects_zero_max_iterations() {
        let grid = GridSize::new(80, 60).unwrap();
        let viewport = Viewport::default();

        let kernel = EscapeTimeKernel::new(grid, viewport, 0, Precision::Single);

        assert_eq!(kernel, Err(EscapeTimeKernelConstructorError::ZeroMaxIterations));
    }

    #[test]
    fn test_interior_point_reaches_iteration_cap() {
        // The centre pixel of a view centred on the origin is c = 0 + 0i,
        // which never escapes.
        let kernel = centred_kernel(0.0, 0.0, Precision::Single);

        let iterations = kernel.compute(Point { x: 40, y: 30 }).unwrap();

        assert_eq!(iterations, 800);
    }

    #[test]
    fn test_interior_point_reaches_iteration_cap_in_double_precision() {
        let kernel = centred_kernel(0.0, 0.0, Precision::Double);

        let iterations = kernel.compute(Point { x: 40, y: 30 }).unwrap();

        assert_eq!(iterations, 800);
    }

    #[test]
    fn test_far_exterior_point_escapes_immediately() {
        // c = 3 + 3i leaves the bound on the first recurrence step.
        let kernel = centred_kernel(3.0, 3.0, Precision::Single);

        let iterations = kernel.compute(Point { x: 40, y: 30 }).unwrap();

        assert!(iterations <= 1);
    }

    #[test]
    fn test_pixel_outside_grid_is_an_error() {
        let kernel = centred_kernel(0.0, 0.0, Precision::Single);

        let result = kernel.compute(Point { x: 80, y: 30 });

        assert!(matches!(result, Err(EscapeTimeKernelError::PixelOutsideGrid { .. })));
    }

    #[test]
    fn test_default_centre_sits_in_a_slow_escaping_region() {
        // The startup viewport centres on a point close to the set's
        // boundary: far more iterations than the fast-escaping background,
        // without reaching the cap. The exact count depends on precision.
        let grid = GridSize::new(80, 60).unwrap();
        let kernel =
            EscapeTimeKernel::new(grid, Viewport::default(), 800, Precision::Single).unwrap();

        let iterations = kernel.compute(Point { x: 40, y: 30 }).unwrap();

        assert!(iterations > 100, "expected a slow escape, got {}", iterations);
        assert!(iterations <= 800);
    }

    #[test]
    fn test_zoom_narrows_the_sampled_region() {
        // Raising zoom shrinks the plane distance between neighbouring
        // pixels, so a pixel near the edge samples a point closer to centre.
        let grid = GridSize::new(80, 60).unwrap();
        let wide =
            EscapeTimeKernel::new(grid, Viewport::new(0.0, 0.0, 1.0).unwrap(), 50, Precision::Double)
                .unwrap();
        let narrow =
            EscapeTimeKernel::new(grid, Viewport::new(0.0, 0.0, 8.0).unwrap(), 50, Precision::Double)
                .unwrap();

        // At zoom 8 the whole view lies inside the set around the origin.
        let corner = Point { x: 0, y: 0 };
        assert!(wide.compute(corner).unwrap() < 50);
        assert_eq!(narrow.compute(corner).unwrap(), 50);
    }
}
