use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::navigation::action::NavigationAction;
use std::error::Error;
use std::fmt;

/// Pan distance in plane units at zoom 1.0; scaled down as zoom increases.
pub const PAN_STEP: f64 = 0.1;

/// Multiplier applied to the zoom factor per zoom step.
pub const ZOOM_RATIO: f64 = 1.05;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NavigationError {
    DegenerateTransition {
        action: NavigationAction,
        source: ViewportError,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTransition { action, source } => {
                write!(f, "{:?} would produce an invalid viewport: {}", action, source)
            }
        }
    }
}

impl Error for NavigationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DegenerateTransition { source, .. } => Some(source),
        }
    }
}

/// Applies one navigation action to a viewport, returning the new state.
///
/// Panning moves the centre offset by `PAN_STEP / zoom` along one axis, so a
/// key press covers the same fraction of the visible region at any depth.
/// Zooming multiplies or divides the zoom factor by `ZOOM_RATIO`.
///
/// Transitions that would leave the viewport degenerate (a non-finite offset,
/// or a zoom that is zero or non-finite) are rejected and the caller keeps
/// its current state.
pub fn apply_navigation(
    viewport: Viewport,
    action: NavigationAction,
) -> Result<Viewport, NavigationError> {
    let pan = PAN_STEP / viewport.zoom();

    let (offset_x, offset_y, zoom) = match action {
        NavigationAction::PanUp => (viewport.offset_x(), viewport.offset_y() - pan, viewport.zoom()),
        NavigationAction::PanDown => (viewport.offset_x(), viewport.offset_y() + pan, viewport.zoom()),
        NavigationAction::PanLeft => (viewport.offset_x() - pan, viewport.offset_y(), viewport.zoom()),
        NavigationAction::PanRight => (viewport.offset_x() + pan, viewport.offset_y(), viewport.zoom()),
        NavigationAction::ZoomIn => (viewport.offset_x(), viewport.offset_y(), viewport.zoom() * ZOOM_RATIO),
        NavigationAction::ZoomOut => (viewport.offset_x(), viewport.offset_y(), viewport.zoom() / ZOOM_RATIO),
    };

    Viewport::new(offset_x, offset_y, zoom)
        .map_err(|source| NavigationError::DegenerateTransition { action, source })
}
