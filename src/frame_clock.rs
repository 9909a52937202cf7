//! Per-frame time source.

use std::time::Instant;

use crate::constants::MAX_FRAME_DT;

/// Measures the time between rendered frames.
///
/// Each tick yields the elapsed wall time since the previous tick, capped so
/// a stalled frame (window drag, debugger break) turns into one normal step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Instant,
    max_dt: f32,
    pub frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT)
    }

    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_dt,
            frame: 0,
        }
    }

    /// Step length for the frame starting now
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let raw_dt = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        let dt = raw_dt.min(self.max_dt);
        self.frame += 1;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
