//! Camera framing and drag constants.

/// Orthographic half-height of the view (world units)
pub const CAMERA_HALF_HEIGHT: f32 = 5.0;
/// Fixed depth the camera sits at; framing never touches it
pub const CAMERA_DEPTH: f32 = -10.0;
/// Slack added around the viewport when framing the active region (world units)
pub const CAMERA_VIEW_EXTENSION: f32 = 2.0;
/// Exponential decay rate of coasting velocity (per second)
pub const CAMERA_FRICTION: f32 = 5.0;
/// Smoothing rate applied to drag velocity samples (per second)
pub const CAMERA_DRAG_SMOOTHING: f32 = 10.0;
/// Coasting stops once speed drops to this value (world units per second)
pub const CAMERA_STOP_SPEED: f32 = 0.1;
