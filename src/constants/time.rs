//! Frame timing constants.

/// Upper bound for a single frame step (seconds)
pub const MAX_FRAME_DT: f32 = 0.1; // 100ms cap (~10 FPS minimum)
