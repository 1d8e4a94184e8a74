use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps an escape-time iteration count to a display colour.
pub trait IterationMap {
    type Failure: Error;

    fn colour_for(&self, iterations: u32) -> Result<Colour, Self::Failure>;
}
