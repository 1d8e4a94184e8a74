/// The six discrete navigation actions a user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
}
