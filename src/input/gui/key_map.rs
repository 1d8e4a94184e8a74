use crate::core::navigation::action::NavigationAction;
use winit::keyboard::KeyCode;

/// Translates a pressed key into a navigation action.
///
/// WASD pans, E dives in, Q backs out. Everything else is ignored.
pub fn navigation_for_key(key: KeyCode) -> Option<NavigationAction> {
    match key {
        KeyCode::KeyW => Some(NavigationAction::PanUp),
        KeyCode::KeyS => Some(NavigationAction::PanDown),
        KeyCode::KeyA => Some(NavigationAction::PanLeft),
        KeyCode::KeyD => Some(NavigationAction::PanRight),
        KeyCode::KeyE => Some(NavigationAction::ZoomIn),
        KeyCode::KeyQ => Some(NavigationAction::ZoomOut),
        _ => None,
    }
}
