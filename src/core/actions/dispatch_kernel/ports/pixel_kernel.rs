use crate::core::data::point::Point;
use std::error::Error;

/// A per-pixel compute program with no cross-pixel dependencies.
///
/// Implementations must be pure functions of the pixel coordinate and their
/// own parameters, so the dispatcher is free to evaluate every pixel on an
/// independent worker.
pub trait PixelKernel {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
