//! Pointer input constants.

/// How long the button must be held before a press turns into a drag (seconds)
pub const CLICK_TO_DRAG_DURATION: f32 = 0.15;
