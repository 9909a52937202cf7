//! Pointer input and click/drag detection.
//!
//! A press turns into a drag once the button has been held for the
//! configured duration; the drag starts at the world point where the button
//! went down. Releasing the button ends the drag. A press released before
//! the threshold is a plain click and emits nothing here.

use glam::Vec2;

use crate::events::{DragSignal, EventBus};

/// Raw pointer tracking
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Pointer position in screen pixels, origin bottom-left, y up
    pub pointer: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position given in window coordinates (origin top-left, y down).
    pub fn set_pointer_from_window(&mut self, x: f32, y: f32, window_height: f32) {
        self.pointer = Vec2::new(x, window_height - y);
    }
}

/// Turns button presses and releases into drag signals
#[derive(Debug, Clone)]
pub struct ClickHandler {
    click_to_drag_duration: f32,
    press_point: Vec2,
    /// Button is down and has not turned into a drag yet
    is_click: bool,
    is_drag: bool,
    hold_duration: f32,
}

impl ClickHandler {
    pub fn new(click_to_drag_duration: f32) -> Self {
        Self {
            click_to_drag_duration,
            press_point: Vec2::ZERO,
            is_click: false,
            is_drag: false,
            hold_duration: 0.0,
        }
    }

    /// Button went down at `world_point`.
    pub fn press(&mut self, world_point: Vec2) {
        self.is_click = true;
        self.hold_duration = 0.0;
        self.press_point = world_point;
    }

    /// Button went up at `world_point`; ends the drag if one started.
    pub fn release(&mut self, world_point: Vec2, signals: &mut EventBus<DragSignal>) {
        if self.is_drag {
            signals.publish(DragSignal::End(world_point));
            self.is_drag = false;
        }
        self.is_click = false;
    }

    /// Advance the hold timer. Emits the drag start once the threshold is reached.
    pub fn update(&mut self, dt: f32, signals: &mut EventBus<DragSignal>) {
        if !self.is_click {
            return;
        }

        self.hold_duration += dt;
        if self.hold_duration >= self.click_to_drag_duration {
            signals.publish(DragSignal::Start(self.press_point));
            self.is_click = false;
            self.is_drag = true;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.is_drag
    }
}
