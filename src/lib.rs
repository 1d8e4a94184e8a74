mod controllers;
mod core;
mod input;

pub use crate::controllers::generation::{EscapeTimeFrameSource, FrameSource, GenerationController};
pub use crate::core::actions::dispatch_kernel::dispatch_kernel::dispatch_kernel;
pub use crate::core::actions::dispatch_kernel::ports::pixel_kernel::PixelKernel;
pub use crate::core::actions::generate_frame::generate_frame::{GenerateFrameError, generate_frame};
pub use crate::core::actions::generate_frame::ports::iteration_map::IterationMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::image_buffer::ImageBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::kernel::escape_time::EscapeTimeKernel;
pub use crate::core::kernel::precision::Precision;
pub use crate::core::navigation::{NavigationAction, apply_navigation};
pub use crate::core::palette::table::PaletteTable;
pub use crate::input::gui::run_viewer;
