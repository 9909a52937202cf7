//! Window creation and winit glue.
//!
//! Nothing is drawn into the window; it exists to deliver pointer, keyboard
//! and resize events and to pace frames with redraw requests.

use winit::dpi::PhysicalSize;
use winit::error::OsError;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::constants::*;

/// Open the demo window.
pub fn create_window(event_loop: &ActiveEventLoop) -> Result<Window, OsError> {
    let attrs = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .with_resizable(true);

    event_loop.create_window(attrs)
}

/// Viewport size in pixels as floats, never zero.
pub fn viewport_size(size: PhysicalSize<u32>) -> (f32, f32) {
    (size.width.max(1) as f32, size.height.max(1) as f32)
}
