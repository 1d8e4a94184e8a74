use crate::controllers::generation::ports::frame_source::FrameSource;
use crate::core::actions::generate_frame::generate_frame::generate_frame;
use crate::core::data::grid_size::GridSize;
use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::kernel::escape_time::{EscapeTimeKernel, EscapeTimeKernelConstructorError};
use crate::core::kernel::precision::Precision;
use crate::core::palette::table::PaletteTable;
use std::error::Error;

/// The production frame pipeline: escape-time kernel dispatch followed by
/// palette mapping. The palette is built once here and reused for every
/// frame; only the viewport varies between jobs.
#[derive(Debug)]
pub struct EscapeTimeFrameSource {
    grid: GridSize,
    max_iterations: u32,
    precision: Precision,
    palette: PaletteTable,
}

impl EscapeTimeFrameSource {
    pub fn new(
        grid: GridSize,
        max_iterations: u32,
        precision: Precision,
    ) -> Result<Self, EscapeTimeKernelConstructorError> {
        if max_iterations == 0 {
            return Err(EscapeTimeKernelConstructorError::ZeroMaxIterations);
        }

        Ok(Self {
            grid,
            max_iterations,
            precision,
            palette: PaletteTable::build(max_iterations),
        })
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }
}

impl FrameSource for EscapeTimeFrameSource {
    fn generate(&self, viewport: Viewport) -> Result<ImageBuffer, Box<dyn Error + Send + Sync>> {
        let kernel =
            EscapeTimeKernel::new(self.grid, viewport, self.max_iterations, self.precision)?;

        generate_frame(self.grid, &kernel, &self.palette).map_err(Into::into)
    }
}
