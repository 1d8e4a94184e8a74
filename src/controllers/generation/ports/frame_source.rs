use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::viewport::Viewport;
use std::error::Error;

/// Produces one complete frame for a viewport snapshot.
///
/// Implementations run on the controller's worker thread and may block for
/// as long as the computation takes; the controller never calls `generate`
/// while another call is outstanding.
pub trait FrameSource: Send + Sync {
    fn generate(&self, viewport: Viewport) -> Result<ImageBuffer, Box<dyn Error + Send + Sync>>;
}
