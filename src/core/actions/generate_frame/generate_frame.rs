use crate::core::actions::dispatch_kernel::dispatch_kernel::dispatch_kernel;
use crate::core::actions::dispatch_kernel::ports::pixel_kernel::PixelKernel;
use crate::core::actions::generate_frame::ports::iteration_map::IterationMap;
use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::image_buffer::{ImageBuffer, ImageBufferError};
use std::error::Error;
use std::fmt;

/// Error type for full-frame generation.
///
/// Distinguishes kernel dispatch failures from colour-mapping failures so
/// callers can report which stage of the pipeline broke.
#[derive(Debug)]
pub enum GenerateFrameError<KE, ME> {
    Kernel(KE),
    IterationMap(ME),
    ImageBuffer(ImageBufferError),
}

impl<KE: fmt::Display, ME: fmt::Display> fmt::Display for GenerateFrameError<KE, ME> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kernel(err) => write!(f, "kernel dispatch error: {}", err),
            Self::IterationMap(err) => write!(f, "colour mapping error: {}", err),
            Self::ImageBuffer(err) => write!(f, "image buffer error: {}", err),
        }
    }
}

impl<KE, ME> Error for GenerateFrameError<KE, ME>
where
    KE: Error + 'static,
    ME: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kernel(err) => Some(err),
            Self::IterationMap(err) => Some(err),
            Self::ImageBuffer(err) => Some(err),
        }
    }
}

/// Generates one complete display-ready frame.
///
/// Dispatches the kernel over the full grid, then maps every iteration count
/// through the palette into an RGB byte buffer, pixel `(x, y)` landing at
/// byte offset `(y·width + x)·3`. Deterministic: identical inputs produce
/// byte-identical buffers.
pub fn generate_frame<K, M>(
    grid: GridSize,
    kernel: &K,
    palette: &M,
) -> Result<ImageBuffer, GenerateFrameError<K::Failure, M::Failure>>
where
    K: PixelKernel<Success = u32> + Sync,
    K::Failure: Send,
    M: IterationMap,
{
    let iterations = dispatch_kernel(grid, kernel).map_err(GenerateFrameError::Kernel)?;

    let mut data = Vec::with_capacity(grid.rgb_len());

    for count in iterations {
        let Colour { r, g, b } = palette
            .colour_for(count)
            .map_err(GenerateFrameError::IterationMap)?;

        data.push(r);
        data.push(g);
        data.push(b);
    }

    ImageBuffer::from_data(grid, data).map_err(GenerateFrameError::ImageBuffer)
}
