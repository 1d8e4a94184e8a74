//! The viewer's event loop.
//!
//! One interactive thread: poll events, feed navigation into the viewport,
//! step the generation controller, and upload whatever frame is currently
//! published — every iteration, stale or not. Generation itself never runs
//! on this thread.

use crate::controllers::generation::{EscapeTimeFrameSource, GenerationController};
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::kernel::precision::Precision;
use crate::core::navigation::apply::apply_navigation;
use crate::input::gui::key_map::navigation_for_key;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const MAX_ITERATIONS: u32 = 800;

/// Opens the viewer window and runs until it is closed.
///
/// Initialization failures (event loop, window, surface, degenerate
/// configuration) are returned to the caller; once the loop is running, the
/// only fatal runtime error is losing the render surface.
pub fn run_viewer() -> Result<(), Box<dyn Error>> {
    let grid = GridSize::new(WIDTH, HEIGHT)?;
    let source = EscapeTimeFrameSource::new(grid, MAX_ITERATIONS, Precision::Single)?;
    let controller = GenerationController::new(source);

    let mut viewport = Viewport::default();
    controller.request_redraw();

    let event_loop = EventLoop::new()?;

    // pixels borrows the window for the life of the surface; the window
    // lives until process exit anyway.
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(f64::from(WIDTH), f64::from(HEIGHT)))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let surface_texture = SurfaceTexture::new(WIDTH, HEIGHT, window);
    let mut pixels = Pixels::new(WIDTH, HEIGHT, surface_texture)?;

    log::info!(
        "viewer started: {}x{} grid, {} max iterations",
        WIDTH,
        HEIGHT,
        MAX_ITERATIONS
    );

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput { event: key_event, .. } => {
                        if key_event.state != ElementState::Pressed {
                            return;
                        }

                        let PhysicalKey::Code(code) = key_event.physical_key else {
                            return;
                        };

                        if let Some(action) = navigation_for_key(code) {
                            match apply_navigation(viewport, action) {
                                Ok(next) => {
                                    viewport = next;
                                    controller.request_redraw();
                                }
                                Err(err) => {
                                    log::debug!("navigation rejected: {}", err);
                                }
                            }
                        }
                    }
                    WindowEvent::Resized(size) => {
                        // The framebuffer is fixed; only the surface follows
                        // the window (scale-factor changes mostly).
                        if size.width > 0 && size.height > 0 {
                            if let Err(err) = pixels.resize_surface(size.width, size.height) {
                                log::warn!("surface resize failed: {}", err);
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        if let Some(frame) = controller.latest_frame() {
                            copy_rgb_into_rgba(frame.bytes(), pixels.frame_mut());
                        }

                        if let Err(err) = pixels.render() {
                            log::error!("presenting failed: {}", err);
                            elwt.exit();
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                controller.poll(viewport);
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

/// Expands a packed RGB frame into the surface's RGBA layout.
fn copy_rgb_into_rgba(rgb: &[u8], rgba: &mut [u8]) {
    for (src, dest) in rgb.chunks_exact(3).zip(rgba.chunks_exact_mut(4)) {
        dest[0] = src[0];
        dest[1] = src[1];
        dest[2] = src[2];
        dest[3] = 255;
    }
}
