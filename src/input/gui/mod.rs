//! Windowed viewer: a winit event loop over a pixels framebuffer.

mod app;
mod key_map;

pub use app::run_viewer;
