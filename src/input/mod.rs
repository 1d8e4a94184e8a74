//! Input and presentation adapters around the generation core.

pub mod gui;
